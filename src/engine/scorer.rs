use log::debug;
use serde::Serialize;

use super::overrides::{default_overrides, OverrideTable, MAX_REASONS};
use super::rules::RuleSet;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::AppError;

const BASELINE_RATING: f64 = 3.0;
const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 5.0;
const HIGHEST_TIER_PENALTY: f64 = 0.5;
pub const FALLBACK_REASON: &str = "Playable matchup - depends on map, angles, and team comp.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupResult {
    pub candidate_id: String,
    pub rating: u8,
    pub reasons: Vec<String>,
}

/// Scores one (adversary, candidate) pair from injected reference data.
/// Holds no mutable state, so results only change when the data does.
#[derive(Debug, Clone)]
pub struct MatchupScorer {
    catalog: Catalog,
    rules: RuleSet,
    overrides: OverrideTable,
}

impl Default for MatchupScorer {
    fn default() -> Self {
        MatchupScorer::new(Catalog::default(), RuleSet::default(), default_overrides())
    }
}

impl MatchupScorer {
    pub fn new(catalog: Catalog, rules: RuleSet, overrides: OverrideTable) -> Self {
        MatchupScorer {
            catalog,
            rules,
            overrides,
        }
    }

    /// Built-in catalog, with rules/overrides replaced by the configured
    /// JSON files when present.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let rules = match &config.rules_path {
            Some(path) => RuleSet::load(path)?,
            None => RuleSet::default(),
        };
        let overrides = match &config.overrides_path {
            Some(path) => OverrideTable::load(path)?,
            None => default_overrides(),
        };
        debug!(
            "Loaded {} rules and {} overrides",
            rules.rules().len(),
            overrides.len()
        );
        Ok(MatchupScorer::new(Catalog::default(), rules, overrides))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    pub fn score(&self, adversary_id: &str, candidate_id: &str) -> MatchupResult {
        if let Some(o) = self.overrides.get(adversary_id, candidate_id) {
            debug!("Override hit: {} -> {}", adversary_id, candidate_id);
            return MatchupResult {
                candidate_id: candidate_id.to_string(),
                rating: o.rating,
                reasons: o.reasons.clone(),
            };
        }

        let adversary_tags = self.catalog.tags(adversary_id);
        let candidate_tags = self.catalog.tags(candidate_id);

        let mut rating = BASELINE_RATING;
        let mut reasons = Vec::new();
        for rule in self.rules.matching(adversary_tags, candidate_tags) {
            rating += rule.delta;
            reasons.push(rule.reason.clone());
        }

        let hard_to_play = self
            .catalog
            .get(candidate_id)
            .map(|h| h.difficulty.is_highest())
            .unwrap_or(false);
        if hard_to_play {
            rating -= HIGHEST_TIER_PENALTY;
        }

        if reasons.is_empty() {
            reasons.push(FALLBACK_REASON.to_string());
        }
        reasons.truncate(MAX_REASONS);

        MatchupResult {
            candidate_id: candidate_id.to_string(),
            rating: rating.round().clamp(MIN_RATING, MAX_RATING) as u8,
            reasons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Difficulty, Hero, Role, TagSet};
    use crate::engine::rules::{Condition, Rule};

    fn fixture_scorer(rules: RuleSet, overrides: OverrideTable) -> MatchupScorer {
        let mut tags = TagSet::new();
        tags.insert("bruiser", &["Sustain"]);
        tags.insert("healer_breaker", &["Anti-Heal"]);
        tags.insert("hard_breaker", &["Anti-Heal"]);
        let catalog = Catalog::new(
            vec![
                Hero::new("bruiser", "Bruiser", Role::Tank, Difficulty::Beginner),
                Hero::new("healer_breaker", "Breaker", Role::Support, Difficulty::Intermediate),
                Hero::new("hard_breaker", "Hard Breaker", Role::Support, Difficulty::Advanced),
            ],
            tags,
        );
        MatchupScorer::new(catalog, rules, overrides)
    }

    #[test]
    fn sustain_versus_anti_heal_scores_five() {
        let scorer = fixture_scorer(RuleSet::default(), OverrideTable::new());
        let result = scorer.score("bruiser", "healer_breaker");
        assert_eq!(result.rating, 5);
        assert_eq!(result.reasons, ["Anti-heal breaks sustain windows."]);
    }

    #[test]
    fn highest_tier_penalty_is_applied_once() {
        // 3 + 2 - 0.5 = 4.5, rounds half away from zero.
        let scorer = fixture_scorer(RuleSet::default(), OverrideTable::new());
        assert_eq!(scorer.score("bruiser", "hard_breaker").rating, 5);

        // 3 - 0.5 = 2.5 with no rule firing.
        assert_eq!(scorer.score("nobody", "hard_breaker").rating, 3);

        let scorer = MatchupScorer::default();
        // widowmaker (Advanced) vs reinhardt: no rule fires, 2.5 -> 3.
        assert_eq!(scorer.score("reinhardt", "widowmaker").rating, 3);
    }

    #[test]
    fn unknown_ids_score_neutral_with_fallback_reason() {
        let scorer = MatchupScorer::default();
        let result = scorer.score("ghost", "phantom");
        assert_eq!(result.candidate_id, "phantom");
        assert_eq!(result.rating, 3);
        assert_eq!(result.reasons, [FALLBACK_REASON]);
    }

    #[test]
    fn override_is_returned_verbatim() {
        let mut overrides = OverrideTable::new();
        overrides.insert("bruiser", "healer_breaker", 2, &["hand tuned"]).unwrap();
        // Out-of-range override ratings are not re-clamped.
        overrides.insert("bruiser", "hard_breaker", 9, &["trusted"]).unwrap();
        let scorer = fixture_scorer(RuleSet::default(), overrides);

        let result = scorer.score("bruiser", "healer_breaker");
        assert_eq!(result.rating, 2);
        assert_eq!(result.reasons, ["hand tuned"]);
        assert_eq!(scorer.score("bruiser", "hard_breaker").rating, 9);
    }

    #[test]
    fn default_overrides_beat_rules() {
        let scorer = MatchupScorer::default();
        let result = scorer.score("roadhog", "ana");
        assert_eq!(result.rating, 5);
        assert_eq!(
            result.reasons,
            ["Anti-heal deletes sustain; Sleep punishes hook/commit windows."]
        );
        let result = scorer.score("winston", "reaper");
        assert_eq!(result.rating, 4);
    }

    #[test]
    fn rating_is_clamped_and_reasons_truncated() {
        let stacked: Vec<Rule> = (0..6)
            .map(|i| Rule::new(Condition::candidate("Anti-Heal"), 1.0, &format!("bonus {}", i)))
            .collect();
        let scorer = fixture_scorer(RuleSet::new(stacked).unwrap(), OverrideTable::new());
        let result = scorer.score("bruiser", "healer_breaker");
        assert_eq!(result.rating, 5);
        assert_eq!(result.reasons, ["bonus 0", "bonus 1", "bonus 2", "bonus 3"]);

        let penalties: Vec<Rule> = (0..3)
            .map(|i| Rule::new(Condition::adversary("Sustain"), -2.0, &format!("malus {}", i)))
            .collect();
        let scorer = fixture_scorer(RuleSet::new(penalties).unwrap(), OverrideTable::new());
        assert_eq!(scorer.score("bruiser", "healer_breaker").rating, 1);
    }

    #[test]
    fn every_pair_in_the_roster_is_in_range() {
        let scorer = MatchupScorer::default();
        let ids: Vec<&str> = scorer.catalog().heroes().iter().map(|h| h.id.as_str()).collect();
        for adversary in &ids {
            for candidate in &ids {
                let result = scorer.score(adversary, candidate);
                assert!((1..=5).contains(&result.rating));
                assert!((1..=4).contains(&result.reasons.len()));
            }
        }
    }

    #[test]
    fn configured_files_replace_builtin_data() {
        let dir = tempfile::tempdir().unwrap();
        let rules_path = dir.path().join("rules.json");
        let overrides_path = dir.path().join("overrides.json");
        std::fs::write(
            &rules_path,
            r#"[{"when":{"op":"all","of":[{"op":"adversary_has","tag":"Large"},{"op":"candidate_has","tag":"Hitscan"}]},"delta":-2.0,"reason":"Shields soak hitscan."}]"#,
        )
        .unwrap();
        std::fs::write(
            &overrides_path,
            r#"[{"adversary":"pharah","candidate":"mercy","rating":1,"reasons":["Pocketed Pharah wins."]}]"#,
        )
        .unwrap();

        let paths = [
            ("COUNTER_PICK_RULES", rules_path.to_string_lossy().to_string()),
            ("COUNTER_PICK_OVERRIDES", overrides_path.to_string_lossy().to_string()),
        ];
        let config = Config::from_lookup(|key| {
            paths.iter().find(|(k, _)| *k == key).map(|(_, v)| v.clone())
        })
        .unwrap();
        let scorer = MatchupScorer::from_config(&config).unwrap();

        // Built-in rules give cassidy vs reinhardt nothing; the file rule applies -2.
        let result = scorer.score("reinhardt", "cassidy");
        assert_eq!(result.rating, 1);
        assert_eq!(result.reasons, ["Shields soak hitscan."]);

        // The built-in roadhog -> ana override is gone, the file one is in.
        assert_eq!(scorer.overrides().len(), 1);
        assert_eq!(scorer.score("pharah", "mercy").rating, 1);
        assert_eq!(scorer.score("roadhog", "ana").reasons, [FALLBACK_REASON]);
    }

    #[test]
    fn invalid_rules_file_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let rules_path = dir.path().join("rules.json");
        std::fs::write(&rules_path, r#"[{"when":{"op":"candidate_has","tag":"Burst"},"delta":1.0,"reason":""}]"#).unwrap();
        let value = rules_path.to_string_lossy().to_string();
        let config = Config::from_lookup(|key| (key == "COUNTER_PICK_RULES").then(|| value.clone())).unwrap();

        assert!(matches!(
            MatchupScorer::from_config(&config),
            Err(AppError::InvalidRule(_))
        ));
    }

    #[test]
    fn exported_data_reloads_to_the_same_scores() {
        let builtin = MatchupScorer::default();
        let dir = tempfile::tempdir().unwrap();
        let rules_path = dir.path().join("rules.json");
        let overrides_path = dir.path().join("overrides.json");
        std::fs::write(&rules_path, builtin.rules().to_json().unwrap()).unwrap();
        std::fs::write(&overrides_path, builtin.overrides().to_json().unwrap()).unwrap();

        let paths = [
            ("COUNTER_PICK_RULES", rules_path.to_string_lossy().to_string()),
            ("COUNTER_PICK_OVERRIDES", overrides_path.to_string_lossy().to_string()),
        ];
        let config = Config::from_lookup(|key| {
            paths.iter().find(|(k, _)| *k == key).map(|(_, v)| v.clone())
        })
        .unwrap();
        let reloaded = MatchupScorer::from_config(&config).unwrap();

        for (adversary, candidate) in [("roadhog", "ana"), ("pharah", "ashe"), ("reinhardt", "widowmaker")] {
            assert_eq!(
                reloaded.score(adversary, candidate),
                builtin.score(adversary, candidate)
            );
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let scorer = MatchupScorer::default();
        assert_eq!(scorer.score("pharah", "ashe"), scorer.score("pharah", "ashe"));
    }
}
