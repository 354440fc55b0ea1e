use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const MAX_REASONS: usize = 4;

/// Hand-authored matchup result, trusted verbatim by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Override {
    pub rating: u8,
    pub reasons: Vec<String>,
}

/// On-disk shape of one override; tuple keys do not map onto JSON objects.
#[derive(Debug, Serialize, Deserialize)]
struct OverrideEntry {
    adversary: String,
    candidate: String,
    rating: u8,
    reasons: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideTable {
    entries: HashMap<(String, String), Override>,
}

impl OverrideTable {
    pub fn new() -> Self {
        OverrideTable {
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the override for an (adversary, candidate) pair.
    pub fn insert(
        &mut self,
        adversary: &str,
        candidate: &str,
        rating: u8,
        reasons: &[&str],
    ) -> Result<(), AppError> {
        let reasons = reasons.iter().map(|r| r.to_string()).collect();
        self.insert_owned(adversary.to_string(), candidate.to_string(), rating, reasons)
    }

    fn insert_owned(
        &mut self,
        adversary: String,
        candidate: String,
        rating: u8,
        reasons: Vec<String>,
    ) -> Result<(), AppError> {
        if reasons.is_empty() || reasons.len() > MAX_REASONS {
            return Err(AppError::InvalidOverride {
                adversary,
                candidate,
                message: format!("expected 1-{} reasons, got {}", MAX_REASONS, reasons.len()),
            });
        }
        self.entries
            .insert((adversary, candidate), Override { rating, reasons });
        Ok(())
    }

    pub fn get(&self, adversary: &str, candidate: &str) -> Option<&Override> {
        self.entries
            .get(&(adversary.to_string(), candidate.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let entries: Vec<OverrideEntry> = serde_json::from_str(json)
            .map_err(|e| AppError::JsonError(format!("Failed to parse overrides: {}", e)))?;

        let mut table = OverrideTable::new();
        for entry in entries {
            table.insert_owned(entry.adversary, entry.candidate, entry.rating, entry.reasons)?;
        }
        Ok(table)
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        let mut entries: Vec<OverrideEntry> = self
            .entries
            .iter()
            .map(|((adversary, candidate), o)| OverrideEntry {
                adversary: adversary.clone(),
                candidate: candidate.clone(),
                rating: o.rating,
                reasons: o.reasons.clone(),
            })
            .collect();
        entries.sort_by(|a, b| (&a.adversary, &a.candidate).cmp(&(&b.adversary, &b.candidate)));

        serde_json::to_string_pretty(&entries)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize overrides: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }
}

const DEFAULT_OVERRIDES: &[(&str, &str, u8, &str)] = &[
    (
        "roadhog",
        "ana",
        5,
        "Anti-heal deletes sustain; Sleep punishes hook/commit windows.",
    ),
    (
        "pharah",
        "soldier76",
        4,
        "Consistent hitscan pressure forces safer flight/landings.",
    ),
    (
        "pharah",
        "widowmaker",
        4,
        "Punishes predictable aerial lanes when sightlines are controlled.",
    ),
    (
        "widowmaker",
        "winston",
        4,
        "Dive contests high ground; bubble denies sightlines.",
    ),
    (
        "widowmaker",
        "tracer",
        4,
        "Forces reposition and punishes grapple windows.",
    ),
    (
        "winston",
        "brigitte",
        4,
        "Anti-dive peel denies backline value.",
    ),
    (
        "winston",
        "reaper",
        4,
        "High close-range damage punishes dives when positioned well.",
    ),
];

pub fn default_overrides() -> OverrideTable {
    let mut table = OverrideTable::new();
    for (adversary, candidate, rating, reason) in DEFAULT_OVERRIDES {
        table.entries.insert(
            (adversary.to_string(), candidate.to_string()),
            Override {
                rating: *rating,
                reasons: vec![reason.to_string()],
            },
        );
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_directional() {
        let table = default_overrides();
        assert_eq!(table.len(), 7);
        assert_eq!(table.get("roadhog", "ana").unwrap().rating, 5);
        assert!(table.get("ana", "roadhog").is_none());
    }

    #[test]
    fn rejects_empty_and_oversized_reason_lists() {
        let mut table = OverrideTable::new();
        assert!(table.insert("a", "b", 4, &[]).is_err());
        assert!(table.insert("a", "b", 4, &["1", "2", "3", "4", "5"]).is_err());
        assert!(table.insert("a", "b", 4, &["1", "2", "3", "4"]).is_ok());
        assert!(!table.is_empty());
    }

    #[test]
    fn insert_replaces_existing_pair() {
        let mut table = OverrideTable::new();
        table.insert("a", "b", 2, &["first"]).unwrap();
        table.insert("a", "b", 5, &["second"]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("a", "b").unwrap().reasons, ["second"]);
    }

    #[test]
    fn json_round_trip_keeps_every_pair() {
        let table = default_overrides();
        let json = table.to_json().unwrap();
        let parsed = OverrideTable::from_json(&json).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn invalid_entry_in_json_is_reported() {
        let json = r#"[{"adversary":"x","candidate":"y","rating":3,"reasons":[]}]"#;
        let err = OverrideTable::from_json(json).unwrap_err();
        assert!(matches!(err, AppError::InvalidOverride { .. }));
    }
}
