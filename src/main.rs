use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::warn;
use std::collections::HashSet;

use counter_pick::analysis::history::{summarize, Outcome};
use counter_pick::catalog::maps::{is_known_map, MAPS};
use counter_pick::catalog::{Catalog, Difficulty, Role};
use counter_pick::config::Config;
use counter_pick::display::output::{
    display_counter_recommendations, display_error, display_hero_library, display_info,
    display_match_history, display_stats, display_success, display_team_recommendations,
    display_warning,
};
use counter_pick::engine::recommender::{dedup_team, MAX_TEAM_SIZE};
use counter_pick::engine::{MatchupScorer, RecommendationRanker};
use counter_pick::store::{MatchStore, NewMatch};

#[derive(Parser, Debug)]
#[command(name = "Counter Pick")]
#[command(about = "Hero counter recommendations and match tracking", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct RankOptions {
    /// Role you want to play
    #[arg(short, long, value_enum, default_value = "damage")]
    role: Role,

    /// Number of picks to display (default: COUNTER_PICK_LIMIT or 8)
    #[arg(short, long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Only suggest heroes of this difficulty
    #[arg(short, long, value_enum, conflicts_with = "beginner")]
    difficulty: Option<Difficulty>,

    /// Shorthand for --difficulty beginner
    #[arg(long)]
    beginner: bool,
}

impl RankOptions {
    fn difficulty(&self) -> Option<Difficulty> {
        if self.beginner {
            Some(Difficulty::Beginner)
        } else {
            self.difficulty
        }
    }

    fn limit(&self, config: &Config) -> usize {
        match self.limit {
            Some(n) => n.max(1) as usize,
            None => config.default_limit,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ExportKind {
    Rules,
    Overrides,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Best counters against a single enemy hero
    Counter {
        /// Enemy hero id or name
        enemy: String,

        #[command(flatten)]
        options: RankOptions,
    },
    /// Best counters averaged over an enemy team (up to 5)
    Team {
        /// Enemy hero ids or names
        #[arg(required = true)]
        enemies: Vec<String>,

        #[command(flatten)]
        options: RankOptions,
    },
    /// Record a played match
    Log {
        /// Hero you played (id or name)
        hero: String,

        #[arg(short, long, value_enum)]
        outcome: Outcome,

        /// Role you queued as (defaults to the hero's role)
        #[arg(short, long, value_enum)]
        role: Option<Role>,

        #[arg(short, long)]
        map: Option<String>,

        /// Quick play match (no SR tracked)
        #[arg(long)]
        unranked: bool,

        /// SR gained or lost
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        sr: i32,

        /// Enemy heroes (up to 5)
        #[arg(short, long, num_args = 1..)]
        enemies: Vec<String>,

        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Delete a recorded match by id
    Delete { id: String },
    /// Show recorded matches, newest first
    History {
        #[arg(short, long, default_value = "20")]
        count: usize,
    },
    /// Win rate and SR trend
    Stats,
    /// Browse the hero library
    Heroes {
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(short, long, value_enum)]
        role: Option<Role>,

        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,
    },
    /// Print the active rules or overrides as JSON, ready to edit and point
    /// COUNTER_PICK_RULES / COUNTER_PICK_OVERRIDES at
    Export {
        #[arg(value_enum)]
        kind: ExportKind,
    },
}

fn main() {
    sensible_env_logger::init!();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

const SCORED_NEUTRAL: &str = "scoring it as a neutral matchup";
const RECORDED_AS_ENTERED: &str = "recording it as entered";

/// Map user input to a catalog id. Unknown input is trimmed and passed
/// through; `fallback` tells the user what happens to it.
fn resolve_id(catalog: &Catalog, input: &str, fallback: &str) -> String {
    match catalog.resolve(input) {
        Some(hero) => hero.id.clone(),
        None => {
            warn!("Unknown hero '{}'", input);
            display_warning(&format!(
                "'{}' is not in the hero catalog; {}",
                input, fallback
            ));
            input.trim().to_string()
        }
    }
}

/// The enemies actually scored, and whether distinct ones were dropped to
/// fit the team cap.
fn active_team(team: &[String]) -> (Vec<String>, bool) {
    let distinct: HashSet<&str> = team
        .iter()
        .map(String::as_str)
        .filter(|id| !id.is_empty())
        .collect();
    let active = dedup_team(team).into_iter().map(String::from).collect();
    (active, distinct.len() > MAX_TEAM_SIZE)
}

fn run(args: Args) -> Result<()> {
    let config = Config::from_env()?;

    match args.command {
        Command::Counter { enemy, options } => {
            let scorer = MatchupScorer::from_config(&config).context("Failed to load matchup data")?;
            let catalog = scorer.catalog();
            let enemy_id = resolve_id(catalog, &enemy, SCORED_NEUTRAL);
            let label = catalog
                .get(&enemy_id)
                .map(|h| format!("{} ({})", h.name, h.role))
                .unwrap_or_else(|| enemy_id.clone());

            let ranker = RecommendationRanker::new(&scorer);
            let recs = ranker.recommend(
                &enemy_id,
                options.role,
                options.limit(&config),
                options.difficulty(),
            );
            display_counter_recommendations(&recs, &label, catalog);
        }
        Command::Team { enemies, options } => {
            let scorer = MatchupScorer::from_config(&config).context("Failed to load matchup data")?;
            let catalog = scorer.catalog();
            let team: Vec<String> = enemies
                .iter()
                .map(|e| resolve_id(catalog, e, SCORED_NEUTRAL))
                .collect();
            let (active, capped) = active_team(&team);
            if capped {
                display_info(&format!(
                    "Only the first {} distinct enemies are considered",
                    MAX_TEAM_SIZE
                ));
            }

            let ranker = RecommendationRanker::new(&scorer);
            let recs = ranker.recommend_against_team(
                &active,
                options.role,
                options.limit(&config),
                options.difficulty(),
            );
            display_team_recommendations(&recs, &active, catalog);
        }
        Command::Log {
            hero,
            outcome,
            role,
            map,
            unranked,
            sr,
            enemies,
            notes,
        } => {
            let catalog = Catalog::default();
            let hero_id = resolve_id(&catalog, &hero, RECORDED_AS_ENTERED);
            let role = role
                .or_else(|| catalog.get(&hero_id).map(|h| h.role))
                .unwrap_or(Role::Damage);
            let map = map.unwrap_or_else(|| MAPS[0].to_string());
            if !is_known_map(&map) {
                warn!("Map '{}' is not in the map list", map);
            }
            let adversary_ids = enemies
                .iter()
                .map(|e| resolve_id(&catalog, e, RECORDED_AS_ENTERED))
                .collect();

            let mut store = MatchStore::load(&config.profile, &config.data_dir)
                .context("Failed to load match history")?;
            let record = store
                .add(NewMatch {
                    role,
                    hero_played_id: hero_id,
                    map,
                    outcome,
                    is_ranked: !unranked,
                    rating_delta: sr,
                    adversary_ids,
                    notes,
                })
                .clone();
            store.save().context("Failed to save match history")?;
            display_success(&format!("Logged match {}", record.id));
        }
        Command::Delete { id } => {
            let mut store = MatchStore::load(&config.profile, &config.data_dir)
                .context("Failed to load match history")?;
            let removed = store.delete(&id)?;
            store.save().context("Failed to save match history")?;
            display_success(&format!("Deleted match {}", removed.id));
        }
        Command::History { count } => {
            let store = MatchStore::load(&config.profile, &config.data_dir)
                .context("Failed to load match history")?;
            display_match_history(store.get_recent_matches(count), &Catalog::default());
        }
        Command::Stats => {
            let store = MatchStore::load(&config.profile, &config.data_dir)
                .context("Failed to load match history")?;
            display_info(&format!("Profile: {}", store.profile));
            display_stats(&summarize(&store.matches));
        }
        Command::Heroes {
            search,
            role,
            difficulty,
        } => {
            let catalog = Catalog::default();
            let heroes = catalog.search(&search, role, difficulty);
            display_hero_library(&heroes, &catalog);
        }
        Command::Export { kind } => {
            let scorer = MatchupScorer::from_config(&config).context("Failed to load matchup data")?;
            let json = match kind {
                ExportKind::Rules => scorer.rules().to_json()?,
                ExportKind::Overrides => scorer.overrides().to_json()?,
            };
            println!("{}", json);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn repeated_enemies_do_not_trigger_the_cap_notice() {
        let (active, capped) = active_team(&ids(&["ana", "ana", "ana", "ana", "ana", "ana"]));
        assert_eq!(active, ["ana"]);
        assert!(!capped);
    }

    #[test]
    fn sixth_distinct_enemy_is_dropped_with_notice() {
        let (active, capped) = active_team(&ids(&[
            "ana", "ana", "dva", "genji", "", "mercy", "sojourn", "tracer",
        ]));
        assert_eq!(active, ["ana", "dva", "genji", "mercy", "sojourn"]);
        assert!(capped);
    }

    #[test]
    fn unknown_input_is_trimmed_and_known_input_resolved() {
        let catalog = Catalog::default();
        assert_eq!(resolve_id(&catalog, "  nobody ", RECORDED_AS_ENTERED), "nobody");
        assert_eq!(resolve_id(&catalog, "Ana", SCORED_NEUTRAL), "ana");
    }

    #[test]
    fn export_kind_parses_from_the_command_line() {
        let args = Args::try_parse_from(["counter_pick", "export", "overrides"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Export {
                kind: ExportKind::Overrides
            }
        ));
    }
}
