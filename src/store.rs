use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::analysis::history::{MatchRecord, Outcome};
use crate::catalog::Role;
use crate::engine::recommender::MAX_TEAM_SIZE;
use crate::error::AppError;

/// Fields supplied when logging a match; id and timestamp are assigned here.
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub role: Role,
    pub hero_played_id: String,
    pub map: String,
    pub outcome: Outcome,
    pub is_ranked: bool,
    pub rating_delta: i32,
    pub adversary_ids: Vec<String>,
    pub notes: String,
}

/// Per-profile match history persisted as one JSON file, newest first.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchStore {
    pub profile: String,
    pub last_updated: DateTime<Utc>,
    pub matches: Vec<MatchRecord>,
    #[serde(skip)]
    path: PathBuf,
}

impl MatchStore {
    pub fn new(profile: &str, data_dir: &Path) -> Self {
        MatchStore {
            profile: profile.to_string(),
            last_updated: Utc::now(),
            matches: Vec::new(),
            path: Self::get_store_path(profile, data_dir),
        }
    }

    pub fn get_store_path(profile: &str, data_dir: &Path) -> PathBuf {
        let safe: String = profile
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        data_dir.join(format!("{}.matches.json", safe))
    }

    pub fn load(profile: &str, data_dir: &Path) -> Result<Self, AppError> {
        let path = Self::get_store_path(profile, data_dir);

        match fs::read_to_string(&path) {
            Ok(content) => {
                let mut store: MatchStore = serde_json::from_str(&content).map_err(|e| {
                    AppError::JsonError(format!("Failed to parse match store: {}", e))
                })?;
                store.path = path;
                Ok(store)
            }
            // Nothing logged yet for this profile.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(MatchStore::new(profile, data_dir)),
            Err(e) => Err(AppError::IoError(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                AppError::IoError(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| {
            AppError::JsonError(format!("Failed to serialize match store: {}", e))
        })?;

        fs::write(&self.path, json).map_err(|e| {
            AppError::IoError(format!("Failed to write match store: {}", e))
        })?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a match at the front of the history and return it.
    pub fn add(&mut self, new_match: NewMatch) -> &MatchRecord {
        let adversary_ids = new_match
            .adversary_ids
            .into_iter()
            .take(MAX_TEAM_SIZE)
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();

        let record = MatchRecord {
            id: format!("match_{}", uuid::Uuid::new_v4().simple()),
            timestamp: Utc::now(),
            role: new_match.role,
            hero_played_id: new_match.hero_played_id,
            map: new_match.map,
            outcome: new_match.outcome,
            is_ranked: new_match.is_ranked,
            rating_delta: if new_match.is_ranked {
                new_match.rating_delta
            } else {
                0
            },
            adversary_ids,
            notes: new_match.notes.trim().to_string(),
        };

        self.matches.insert(0, record);
        self.last_updated = Utc::now();
        &self.matches[0]
    }

    pub fn delete(&mut self, id: &str) -> Result<MatchRecord, AppError> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| AppError::MatchNotFound(id.to_string()))?;
        self.last_updated = Utc::now();
        Ok(self.matches.remove(idx))
    }

    pub fn get_recent_matches(&self, count: usize) -> &[MatchRecord] {
        &self.matches[..count.min(self.matches.len())]
    }
}
