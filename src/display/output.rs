use crate::analysis::history::{display_date, MatchRecord, Outcome, StatsSummary};
use crate::catalog::{Catalog, Hero};
use crate::engine::{MatchupResult, TeamRecommendation};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct CounterRow {
    rank: String,
    hero: String,
    difficulty: String,
    rating: String,
    why: String,
}

#[derive(Tabled)]
struct TeamRow {
    rank: String,
    hero: String,
    difficulty: String,
    avg: String,
    #[tabled(rename = "per enemy")]
    per_enemy: String,
}

#[derive(Tabled)]
struct MatchRow {
    id: String,
    date: String,
    hero: String,
    map: String,
    result: String,
    sr: String,
    enemies: String,
}

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "#")]
    number: String,
    date: String,
    cumulative: String,
}

#[derive(Tabled)]
struct HeroRow {
    id: String,
    name: String,
    role: String,
    difficulty: String,
    tags: String,
}

/// Filled/empty five-star bar; input is rounded and clamped to 1..=5.
pub fn stars(rating: f64) -> String {
    let full = rating.round().clamp(1.0, 5.0) as usize;
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

fn hero_name(catalog: &Catalog, id: &str) -> String {
    catalog
        .get(id)
        .map(|h| h.name.clone())
        .unwrap_or_else(|| id.to_string())
}

fn hero_difficulty(catalog: &Catalog, id: &str) -> String {
    catalog
        .get(id)
        .map(|h| h.difficulty.to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn display_counter_recommendations(
    recommendations: &[MatchupResult],
    adversary_label: &str,
    catalog: &Catalog,
) {
    println!(
        "\n{}",
        format!("🎯 Counters for {}", adversary_label).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if recommendations.is_empty() {
        println!("{}", "No heroes match the current filters".yellow());
        return;
    }

    let rows: Vec<CounterRow> = recommendations
        .iter()
        .enumerate()
        .map(|(idx, rec)| CounterRow {
            rank: format!("#{}", idx + 1),
            hero: hero_name(catalog, &rec.candidate_id),
            difficulty: hero_difficulty(catalog, &rec.candidate_id),
            rating: stars(rec.rating as f64),
            why: rec.reasons.join("\n"),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!(
        "\n{}",
        "Ratings are a rule-of-thumb model, not live balance data.".dimmed()
    );
    println!();
}

pub fn display_team_recommendations(
    recommendations: &[TeamRecommendation],
    team: &[String],
    catalog: &Catalog,
) {
    let names: Vec<String> = team.iter().map(|id| hero_name(catalog, id)).collect();
    println!(
        "\n{}",
        format!("👥 Team counters vs {}", names.join(", ")).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if recommendations.is_empty() {
        println!("{}", "No heroes match the current filters".yellow());
        return;
    }

    let rows: Vec<TeamRow> = recommendations
        .iter()
        .enumerate()
        .map(|(idx, rec)| TeamRow {
            rank: format!("#{}", idx + 1),
            hero: hero_name(catalog, &rec.candidate_id),
            difficulty: hero_difficulty(catalog, &rec.candidate_id),
            avg: format!("{:.1} {}", rec.avg_rating, stars(rec.avg_rating)),
            per_enemy: rec
                .per_adversary
                .iter()
                .map(|m| format!("{} {}", hero_name(catalog, &m.adversary_id), m.result.rating))
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    if let Some(top) = recommendations.first() {
        println!("\n{}", "Top Pick".bold().green());
        println!(
            "  {} averages {:.1} across {} enemies",
            hero_name(catalog, &top.candidate_id),
            top.avg_rating,
            top.per_adversary.len()
        );
        for matchup in &top.per_adversary {
            if let Some(reason) = matchup.result.reasons.first() {
                println!(
                    "  • vs {}: {}",
                    hero_name(catalog, &matchup.adversary_id),
                    reason
                );
            }
        }
    }

    println!();
}

pub fn display_match_history(matches: &[MatchRecord], catalog: &Catalog) {
    println!(
        "\n{}",
        format!("📊 MATCH HISTORY ({} matches)", matches.len()).bold().cyan()
    );
    println!("{}\n", "=".repeat(80).cyan());

    if matches.is_empty() {
        println!("{}", "No matches logged yet. Use `log` to add one.".yellow());
        return;
    }

    let rows: Vec<MatchRow> = matches
        .iter()
        .map(|m| MatchRow {
            id: m.id.clone(),
            date: display_date(&m.timestamp),
            hero: hero_name(catalog, &m.hero_played_id),
            map: m.map.clone(),
            result: match m.outcome {
                Outcome::Win => "WIN".green().to_string(),
                Outcome::Loss => "LOSS".red().to_string(),
                Outcome::Draw => "DRAW".yellow().to_string(),
            },
            sr: if m.is_ranked {
                format!("{:+}", m.rating_delta)
            } else {
                "Quick Play".to_string()
            },
            enemies: m
                .adversary_ids
                .iter()
                .map(|id| hero_name(catalog, id))
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_stats(summary: &StatsSummary) {
    println!("\n{}", "📈 STATS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    println!(
        "{} {} W / {} L / {} D ({:.1}% WR over {} matches)\n",
        "Overall:".bold(),
        summary.wins.to_string().green(),
        summary.losses.to_string().red(),
        summary.draws.to_string().yellow(),
        summary.win_rate,
        summary.total
    );

    if summary.trend.is_empty() {
        println!("{}", "Log ranked matches to see a trend line.".yellow());
        println!();
        return;
    }

    let rows: Vec<TrendRow> = summary
        .trend
        .iter()
        .enumerate()
        .map(|(idx, point)| TrendRow {
            number: format!("{}", idx + 1),
            date: point.display_date.clone(),
            cumulative: format!("{:+}", point.cumulative),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    if let Some(last) = summary.trend.last() {
        let net = format!("{:+}", last.cumulative);
        let net = if last.cumulative >= 0 { net.green() } else { net.red() };
        println!("\n{} {}", "Net SR:".bold(), net);
    }

    println!();
}

pub fn display_hero_library(heroes: &[&Hero], catalog: &Catalog) {
    println!(
        "\n{}",
        format!("📚 HEROES ({})", heroes.len()).bold().cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if heroes.is_empty() {
        println!("{}", "No heroes match the current filters".yellow());
        return;
    }

    let rows: Vec<HeroRow> = heroes
        .iter()
        .map(|h| HeroRow {
            id: h.id.clone(),
            name: h.name.clone(),
            role: h.role.to_string(),
            difficulty: h.difficulty.to_string(),
            tags: catalog.tags(&h.id).join(", "),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_clamped() {
        assert_eq!(stars(5.0), "★★★★★");
        assert_eq!(stars(3.4), "★★★☆☆");
        assert_eq!(stars(0.0), "★☆☆☆☆");
        assert_eq!(stars(9.0), "★★★★★");
    }
}
