use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::catalog::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub role: Role,
    pub hero_played_id: String,
    pub map: String,
    pub outcome: Outcome,
    pub is_ranked: bool,
    pub rating_delta: i32,
    pub adversary_ids: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub display_date: String,
    pub cumulative: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub win_rate: f64, // percentage, 0 when there are no matches
    pub trend: Vec<TrendPoint>,
}

impl StatsSummary {
    pub fn win_rate_of(wins: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (wins as f64 / total as f64) * 100.0
        }
    }
}

pub fn display_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Fold a match history into outcome counts and the ranked rating trend.
/// The input is only read; the trend is rebuilt from scratch on every call.
pub fn summarize(matches: &[MatchRecord]) -> StatsSummary {
    let total = matches.len();
    let count = |outcome: Outcome| matches.iter().filter(|m| m.outcome == outcome).count();
    let wins = count(Outcome::Win);
    let losses = count(Outcome::Loss);
    let draws = count(Outcome::Draw);

    let mut ranked: Vec<&MatchRecord> = matches.iter().filter(|m| m.is_ranked).collect();
    // Stable, so same-instant records keep their input order.
    ranked.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    let mut cumulative: i64 = 0;
    let trend = ranked
        .into_iter()
        .map(|m| {
            cumulative += m.rating_delta as i64;
            TrendPoint {
                display_date: display_date(&m.timestamp),
                cumulative,
            }
        })
        .collect();

    StatsSummary {
        total,
        wins,
        losses,
        draws,
        win_rate: StatsSummary::win_rate_of(wins, total),
        trend,
    }
}
