pub mod overrides;
pub mod recommender;
pub mod rules;
pub mod scorer;

pub use overrides::{Override, OverrideTable};
pub use recommender::{AdversaryMatchup, RecommendationRanker, TeamRecommendation};
pub use rules::{Condition, Rule, RuleSet};
pub use scorer::{MatchupResult, MatchupScorer};
