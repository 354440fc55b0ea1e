use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Invalid override for {adversary} -> {candidate}: {message}")]
    InvalidOverride {
        adversary: String,
        candidate: String,
        message: String,
    },

    #[error("Match not found: {0}")]
    MatchNotFound(String),
}
