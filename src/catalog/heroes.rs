use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Role {
    Tank,
    Damage,
    Support,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Tank => "Tank",
            Role::Damage => "Damage",
            Role::Support => "Support",
        };
        f.write_str(label)
    }
}

/// Execution difficulty tier. `Advanced` is the highest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn is_highest(self) -> bool {
        self == Difficulty::Advanced
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub difficulty: Difficulty,
}

impl Hero {
    pub fn new(id: &str, name: &str, role: Role, difficulty: Difficulty) -> Self {
        Hero {
            id: id.to_string(),
            name: name.to_string(),
            role,
            difficulty,
        }
    }
}

// Declaration order doubles as the ranking tie-break order.
const ROSTER: &[(&str, &str, Role, Difficulty)] = &[
    ("dva", "D.Va", Role::Tank, Difficulty::Intermediate),
    ("doomfist", "Doomfist", Role::Tank, Difficulty::Advanced),
    ("hazard", "Hazard", Role::Tank, Difficulty::Intermediate),
    ("junkerqueen", "Junker Queen", Role::Tank, Difficulty::Intermediate),
    ("mauga", "Mauga", Role::Tank, Difficulty::Beginner),
    ("orisa", "Orisa", Role::Tank, Difficulty::Beginner),
    ("ramattra", "Ramattra", Role::Tank, Difficulty::Intermediate),
    ("reinhardt", "Reinhardt", Role::Tank, Difficulty::Beginner),
    ("roadhog", "Roadhog", Role::Tank, Difficulty::Beginner),
    ("sigma", "Sigma", Role::Tank, Difficulty::Advanced),
    ("winston", "Winston", Role::Tank, Difficulty::Intermediate),
    ("wreckingball", "Wrecking Ball", Role::Tank, Difficulty::Advanced),
    ("zarya", "Zarya", Role::Tank, Difficulty::Intermediate),
    ("ashe", "Ashe", Role::Damage, Difficulty::Intermediate),
    ("bastion", "Bastion", Role::Damage, Difficulty::Beginner),
    ("cassidy", "Cassidy", Role::Damage, Difficulty::Beginner),
    ("echo", "Echo", Role::Damage, Difficulty::Advanced),
    ("freja", "Freja", Role::Damage, Difficulty::Advanced),
    ("genji", "Genji", Role::Damage, Difficulty::Advanced),
    ("hanzo", "Hanzo", Role::Damage, Difficulty::Advanced),
    ("junkrat", "Junkrat", Role::Damage, Difficulty::Beginner),
    ("mei", "Mei", Role::Damage, Difficulty::Intermediate),
    ("pharah", "Pharah", Role::Damage, Difficulty::Intermediate),
    ("reaper", "Reaper", Role::Damage, Difficulty::Beginner),
    ("sojourn", "Sojourn", Role::Damage, Difficulty::Advanced),
    ("soldier76", "Soldier: 76", Role::Damage, Difficulty::Beginner),
    ("sombra", "Sombra", Role::Damage, Difficulty::Advanced),
    ("symmetra", "Symmetra", Role::Damage, Difficulty::Intermediate),
    ("torbjorn", "Torbjörn", Role::Damage, Difficulty::Beginner),
    ("tracer", "Tracer", Role::Damage, Difficulty::Advanced),
    ("venture", "Venture", Role::Damage, Difficulty::Intermediate),
    ("widowmaker", "Widowmaker", Role::Damage, Difficulty::Advanced),
    ("vendetta", "Vendetta", Role::Damage, Difficulty::Advanced),
    ("ana", "Ana", Role::Support, Difficulty::Intermediate),
    ("baptiste", "Baptiste", Role::Support, Difficulty::Intermediate),
    ("brigitte", "Brigitte", Role::Support, Difficulty::Beginner),
    ("illari", "Illari", Role::Support, Difficulty::Intermediate),
    ("juno", "Juno", Role::Support, Difficulty::Intermediate),
    ("kiriko", "Kiriko", Role::Support, Difficulty::Advanced),
    ("lifeweaver", "Lifeweaver", Role::Support, Difficulty::Intermediate),
    ("lucio", "Lúcio", Role::Support, Difficulty::Intermediate),
    ("mercy", "Mercy", Role::Support, Difficulty::Beginner),
    ("moira", "Moira", Role::Support, Difficulty::Beginner),
    ("wuyang", "Wuyang", Role::Support, Difficulty::Advanced),
    ("zenyatta", "Zenyatta", Role::Support, Difficulty::Intermediate),
];

pub fn default_heroes() -> Vec<Hero> {
    ROSTER
        .iter()
        .map(|(id, name, role, difficulty)| Hero::new(id, name, *role, *difficulty))
        .collect()
}
