use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Declarative predicate over the adversary's and candidate's tag lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Condition {
    AdversaryHas { tag: String },
    CandidateHas { tag: String },
    All { of: Vec<Condition> },
    Any { of: Vec<Condition> },
    Not { of: Box<Condition> },
}

impl Condition {
    pub fn adversary(tag: &str) -> Self {
        Condition::AdversaryHas {
            tag: tag.to_string(),
        }
    }

    pub fn candidate(tag: &str) -> Self {
        Condition::CandidateHas {
            tag: tag.to_string(),
        }
    }

    pub fn all(of: Vec<Condition>) -> Self {
        Condition::All { of }
    }

    pub fn any(of: Vec<Condition>) -> Self {
        Condition::Any { of }
    }

    pub fn not(of: Condition) -> Self {
        Condition::Not { of: Box::new(of) }
    }

    pub fn eval(&self, adversary: &[String], candidate: &[String]) -> bool {
        match self {
            Condition::AdversaryHas { tag } => adversary.iter().any(|t| t == tag),
            Condition::CandidateHas { tag } => candidate.iter().any(|t| t == tag),
            Condition::All { of } => of.iter().all(|c| c.eval(adversary, candidate)),
            Condition::Any { of } => of.iter().any(|c| c.eval(adversary, candidate)),
            Condition::Not { of } => !of.eval(adversary, candidate),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub when: Condition,
    pub delta: f64,
    pub reason: String,
}

impl Rule {
    pub fn new(when: Condition, delta: f64, reason: &str) -> Self {
        Rule {
            when,
            delta,
            reason: reason.to_string(),
        }
    }
}

/// Ordered rule list. Every matching rule contributes; nothing short-circuits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Result<Self, AppError> {
        let set = RuleSet { rules };
        set.validate()?;
        Ok(set)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn validate(&self) -> Result<(), AppError> {
        for (idx, rule) in self.rules.iter().enumerate() {
            if rule.reason.trim().is_empty() {
                return Err(AppError::InvalidRule(format!(
                    "rule #{} has an empty reason",
                    idx + 1
                )));
            }
            if !rule.delta.is_finite() {
                return Err(AppError::InvalidRule(format!(
                    "rule #{} has a non-finite delta",
                    idx + 1
                )));
            }
        }
        Ok(())
    }

    /// Rules whose condition holds, in declaration order.
    pub fn matching<'a>(
        &'a self,
        adversary: &'a [String],
        candidate: &'a [String],
    ) -> impl Iterator<Item = &'a Rule> + 'a {
        self.rules
            .iter()
            .filter(move |r| r.when.eval(adversary, candidate))
    }

    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let set: RuleSet = serde_json::from_str(json)
            .map_err(|e| AppError::JsonError(format!("Failed to parse rules: {}", e)))?;
        set.validate()?;
        Ok(set)
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize rules: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            rules: default_rules(),
        }
    }
}

pub fn default_rules() -> Vec<Rule> {
    use Condition as C;

    vec![
        Rule::new(
            C::all(vec![C::adversary("Aerial"), C::candidate("Hitscan")]),
            2.0,
            "Hitscan pressure limits aerial uptime.",
        ),
        Rule::new(
            C::all(vec![
                C::adversary("Sniper"),
                C::any(vec![C::candidate("Dive"), C::candidate("Flank")]),
            ]),
            2.0,
            "Dive/flank pressure forces snipers off angles.",
        ),
        Rule::new(
            C::all(vec![
                C::any(vec![C::adversary("Flank"), C::adversary("Dive")]),
                C::any(vec![C::candidate("Peel"), C::candidate("Anti-Dive")]),
            ]),
            2.0,
            "Peel tools deny backline value.",
        ),
        Rule::new(
            C::all(vec![C::adversary("Sustain"), C::candidate("Anti-Heal")]),
            2.0,
            "Anti-heal breaks sustain windows.",
        ),
        Rule::new(
            C::all(vec![
                C::adversary("Large"),
                C::any(vec![C::candidate("Tank-Buster"), C::candidate("Burst")]),
            ]),
            1.0,
            "Burst/tank-buster pressure punishes large hitboxes.",
        ),
        Rule::new(
            C::all(vec![
                C::adversary("No Mobility"),
                C::any(vec![C::candidate("Dive"), C::candidate("Flank")]),
            ]),
            2.0,
            "Immobile targets are vulnerable to coordinated pressure.",
        ),
        Rule::new(
            C::all(vec![C::adversary("Anti-Heal"), C::candidate("Cleanse")]),
            1.0,
            "Cleanse reduces anti/CC impact windows.",
        ),
    ]
}
