use crate::error::AppError;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_LIMIT: usize = 8;
const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Clone)]
pub struct Config {
    pub profile: String,
    pub data_dir: PathBuf,
    pub rules_path: Option<PathBuf>,
    pub overrides_path: Option<PathBuf>,
    pub default_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so parsing can be exercised
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = lookup("COUNTER_PICK_PROFILE")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

        let data_dir = lookup("COUNTER_PICK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let rules_path = lookup("COUNTER_PICK_RULES").map(PathBuf::from);
        let overrides_path = lookup("COUNTER_PICK_OVERRIDES").map(PathBuf::from);

        let default_limit = match lookup("COUNTER_PICK_LIMIT") {
            // Anything below 1 is clamped rather than rejected.
            Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
                AppError::ConfigError(format!(
                    "COUNTER_PICK_LIMIT must be a number, got '{}'",
                    raw
                ))
            })?.max(1) as usize,
            None => DEFAULT_LIMIT,
        };

        Ok(Config {
            profile,
            data_dir,
            rules_path,
            overrides_path,
            default_limit,
        })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".counter_pick")
}
