use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

use super::scorer::{MatchupResult, MatchupScorer};
use crate::catalog::{Difficulty, Role};

pub const MAX_TEAM_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdversaryMatchup {
    pub adversary_id: String,
    pub result: MatchupResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRecommendation {
    pub candidate_id: String,
    /// Mean of the per-adversary ratings, one decimal place. Not clamped.
    pub avg_rating: f64,
    pub per_adversary: Vec<AdversaryMatchup>,
}

/// Ranks every hero of a role as a counter to one adversary or a team.
pub struct RecommendationRanker<'a> {
    scorer: &'a MatchupScorer,
}

impl<'a> RecommendationRanker<'a> {
    pub fn new(scorer: &'a MatchupScorer) -> Self {
        RecommendationRanker { scorer }
    }

    /// Top `limit` counters for one adversary. When `difficulty` is set the
    /// full scored list is filtered before truncation.
    pub fn recommend(
        &self,
        adversary_id: &str,
        role: Role,
        limit: usize,
        difficulty: Option<Difficulty>,
    ) -> Vec<MatchupResult> {
        let mut results: Vec<MatchupResult> = self
            .candidates(role, difficulty)
            .map(|cid| self.scorer.score(adversary_id, cid))
            .collect();

        // Stable: equal ratings keep catalog order.
        results.sort_by(|a, b| b.rating.cmp(&a.rating));
        results.truncate(limit.max(1));

        debug!(
            "Ranked {} {} counters for {}",
            results.len(),
            role,
            adversary_id
        );
        results
    }

    /// Top `limit` counters averaged over up to five distinct adversaries.
    pub fn recommend_against_team(
        &self,
        adversary_ids: &[String],
        role: Role,
        limit: usize,
        difficulty: Option<Difficulty>,
    ) -> Vec<TeamRecommendation> {
        let team = dedup_team(adversary_ids);

        let mut results: Vec<TeamRecommendation> = self
            .candidates(role, difficulty)
            .map(|cid| {
                let per_adversary: Vec<AdversaryMatchup> = team
                    .iter()
                    .map(|aid| AdversaryMatchup {
                        adversary_id: aid.to_string(),
                        result: self.scorer.score(aid, cid),
                    })
                    .collect();

                let total: f64 = per_adversary.iter().map(|m| m.result.rating as f64).sum();
                let avg = total / per_adversary.len().max(1) as f64;

                TeamRecommendation {
                    candidate_id: cid.to_string(),
                    avg_rating: (avg * 10.0).round() / 10.0,
                    per_adversary,
                }
            })
            .collect();

        results.sort_by(|a, b| {
            b.avg_rating
                .partial_cmp(&a.avg_rating)
                .unwrap_or(Ordering::Equal)
        });
        results.truncate(limit.max(1));

        debug!(
            "Ranked {} {} counters against a team of {}",
            results.len(),
            role,
            team.len()
        );
        results
    }

    fn candidates(
        &self,
        role: Role,
        difficulty: Option<Difficulty>,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.scorer
            .catalog()
            .by_role(role)
            .filter(move |h| difficulty.map_or(true, |d| h.difficulty == d))
            .map(|h| h.id.as_str())
    }
}

/// First-seen order, empty ids dropped, capped at five. Ids are compared
/// as given; callers normalise them.
pub fn dedup_team(adversary_ids: &[String]) -> Vec<&str> {
    let mut team: Vec<&str> = Vec::new();
    for id in adversary_ids {
        let id = id.as_str();
        if id.is_empty() || team.contains(&id) {
            continue;
        }
        if team.len() == MAX_TEAM_SIZE {
            break;
        }
        team.push(id);
    }
    team
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Hero, TagSet};
    use crate::engine::overrides::OverrideTable;
    use crate::engine::rules::RuleSet;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    /// Two strong Intermediate counters sit above two Beginner fallbacks.
    fn filter_fixture() -> MatchupScorer {
        let mut tags = TagSet::new();
        tags.insert("brawler", &["Sustain"]);
        tags.insert("strong_a", &["Anti-Heal"]);
        tags.insert("strong_b", &["Anti-Heal"]);
        let catalog = Catalog::new(
            vec![
                Hero::new("brawler", "Brawler", Role::Tank, Difficulty::Beginner),
                Hero::new("strong_a", "Strong A", Role::Damage, Difficulty::Intermediate),
                Hero::new("strong_b", "Strong B", Role::Damage, Difficulty::Intermediate),
                Hero::new("easy_a", "Easy A", Role::Damage, Difficulty::Beginner),
                Hero::new("easy_b", "Easy B", Role::Damage, Difficulty::Beginner),
            ],
            tags,
        );
        MatchupScorer::new(catalog, RuleSet::default(), OverrideTable::new())
    }

    #[test]
    fn recommend_is_sorted_limited_and_role_bound() {
        let scorer = MatchupScorer::default();
        let ranker = RecommendationRanker::new(&scorer);
        let recs = ranker.recommend("pharah", Role::Damage, 8, None);

        assert_eq!(recs.len(), 8);
        assert!(recs.windows(2).all(|w| w[0].rating >= w[1].rating));
        assert!(recs
            .iter()
            .all(|r| scorer.catalog().get(&r.candidate_id).unwrap().role == Role::Damage));
        // Override for pharah -> soldier76 surfaces at the top tier.
        assert!(recs.iter().any(|r| r.candidate_id == "soldier76" && r.rating == 4));
    }

    #[test]
    fn ties_keep_catalog_order() {
        let scorer = MatchupScorer::default();
        let ranker = RecommendationRanker::new(&scorer);
        // An unknown adversary gives every candidate the same neutral base.
        let recs = ranker.recommend("nobody", Role::Tank, 3, Some(Difficulty::Beginner));
        let order: Vec<&str> = recs.iter().map(|r| r.candidate_id.as_str()).collect();
        assert_eq!(order, ["mauga", "orisa", "reinhardt"]);
    }

    #[test]
    fn filter_is_applied_before_limit() {
        let scorer = filter_fixture();
        let ranker = RecommendationRanker::new(&scorer);

        let unfiltered = ranker.recommend("brawler", Role::Damage, 2, None);
        let top: Vec<&str> = unfiltered.iter().map(|r| r.candidate_id.as_str()).collect();
        assert_eq!(top, ["strong_a", "strong_b"]);

        // Filtering the truncated list would leave nothing.
        let limited_then_filtered: Vec<&MatchupResult> = unfiltered
            .iter()
            .filter(|r| scorer.catalog().get(&r.candidate_id).unwrap().difficulty == Difficulty::Beginner)
            .collect();
        assert!(limited_then_filtered.is_empty());

        let filtered = ranker.recommend("brawler", Role::Damage, 2, Some(Difficulty::Beginner));
        let picked: Vec<&str> = filtered.iter().map(|r| r.candidate_id.as_str()).collect();
        assert_eq!(picked, ["easy_a", "easy_b"]);
    }

    #[test]
    fn team_filter_is_applied_before_limit() {
        let scorer = filter_fixture();
        let ranker = RecommendationRanker::new(&scorer);
        let team = ids(&["brawler"]);

        let filtered =
            ranker.recommend_against_team(&team, Role::Damage, 2, Some(Difficulty::Beginner));
        let picked: Vec<&str> = filtered.iter().map(|r| r.candidate_id.as_str()).collect();
        assert_eq!(picked, ["easy_a", "easy_b"]);
        assert!(filtered.iter().all(|r| r.avg_rating == 3.0));
    }

    #[test]
    fn zero_limit_is_raised_to_one() {
        let scorer = MatchupScorer::default();
        let ranker = RecommendationRanker::new(&scorer);
        assert_eq!(ranker.recommend("ana", Role::Support, 0, None).len(), 1);
        assert_eq!(
            ranker
                .recommend_against_team(&ids(&["ana"]), Role::Support, 0, None)
                .len(),
            1
        );
    }

    #[test]
    fn team_is_deduplicated_and_capped() {
        let team = ids(&["a", "b", "a", "", "c", "d", "e", "f", "b"]);
        assert_eq!(dedup_team(&team), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn team_ids_are_not_trimmed() {
        let team = ids(&[" ana", "ana", "ana"]);
        assert_eq!(dedup_team(&team), [" ana", "ana"]);
    }

    #[test]
    fn team_average_rounds_to_one_decimal() {
        let scorer = MatchupScorer::default();
        let ranker = RecommendationRanker::new(&scorer);
        // ana vs roadhog is an override (5); ana vs reinhardt has no rule (3);
        // ana vs mauga fires sustain/anti-heal (5). Mean 13/3 = 4.333...
        let team = ids(&["roadhog", "reinhardt", "mauga"]);
        let recs = ranker.recommend_against_team(&team, Role::Support, 12, None);
        let ana = recs.iter().find(|r| r.candidate_id == "ana").unwrap();

        assert_eq!(ana.avg_rating, 4.3);
        let per: Vec<(&str, u8)> = ana
            .per_adversary
            .iter()
            .map(|m| (m.adversary_id.as_str(), m.result.rating))
            .collect();
        assert_eq!(per, [("roadhog", 5u8), ("reinhardt", 3), ("mauga", 5)]);
        assert!(recs.windows(2).all(|w| w[0].avg_rating >= w[1].avg_rating));
    }

    #[test]
    fn empty_team_yields_zero_averages() {
        let scorer = MatchupScorer::default();
        let ranker = RecommendationRanker::new(&scorer);
        let recs = ranker.recommend_against_team(&[], Role::Tank, 20, None);

        assert_eq!(recs.len(), 13);
        assert!(recs.iter().all(|r| r.avg_rating == 0.0 && r.per_adversary.is_empty()));
        assert!(recs.iter().all(|r| r.avg_rating.is_finite()));
    }
}
