use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bracket_scorer::config::AppConfig;
use bracket_scorer::engine;
use bracket_scorer::ingest;
use bracket_scorer::models::{ActualResults, Bracket, MatchRef, Participant};
use bracket_scorer::viewer::ViewerData;

#[derive(Parser)]
#[command(name = "bracket-scorer")]
#[command(about = "Single-elimination bracket prediction scorer")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a bracket JSON file from an entrants text file
    Setup {
        /// Path to the entrants text file
        #[arg(long, default_value = "entrants.txt")]
        entrants: PathBuf,

        /// Path for the bracket JSON output
        #[arg(long, default_value = "tournament_data.json")]
        output: PathBuf,
    },

    /// Score all participants and write the viewer document
    Score {
        /// Bracket JSON (from `setup`)
        #[arg(long)]
        bracket: PathBuf,

        /// Recorded results JSON (match key -> winner)
        #[arg(long)]
        results: PathBuf,

        /// Participants JSON (array of participant documents)
        #[arg(long)]
        participants: PathBuf,

        /// Where to write the viewer JSON; printed table only when omitted
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also score participants that never locked in their picks
        #[arg(long)]
        include_unlocked: bool,
    },

    /// Cross-check an entrants file against an existing bracket JSON
    Validate {
        /// The new entrants text file
        entrants: PathBuf,

        /// The existing bracket JSON to compare against
        bracket: PathBuf,

        /// Optionally sanity-check a results file against the bracket
        #[arg(long)]
        results: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting bracket-scorer v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    match cli.command {
        Commands::Setup { entrants, output } => {
            let bracket = ingest::parse_entrants_file(&entrants)
                .with_context(|| format!("parsing {}", entrants.display()))?;

            let json = serde_json::to_string_pretty(&bracket)?;
            fs::write(&output, json)
                .with_context(|| format!("writing {}", output.display()))?;

            println!("=== Bracket Setup ===");
            for category in bracket.categories() {
                let draw = bracket.draw(category).unwrap_or(&[]);
                println!("{:<10} {} first-round matches", category, draw.len());
            }
            println!("Written to: {}", output.display());
        }

        Commands::Score {
            bracket,
            results,
            participants,
            output,
            include_unlocked,
        } => {
            let bracket: Bracket = load_json::<Bracket>(&bracket)?.normalize_keys();
            let results = load_results(&results)?;
            let mut participants: Vec<Participant> = load_json(&participants)?;

            if include_unlocked {
                for p in &mut participants {
                    p.is_locked = true;
                }
            }

            let schedule = config.schedule();
            for category in bracket.categories() {
                let draw_len = bracket.draw(category).map_or(0, <[_]>::len);
                if let Err(e) = schedule.validate_draw(draw_len) {
                    tracing::warn!(category, "draw does not fit the round schedule: {}", e);
                }
            }

            let viewer = ViewerData::build(&bracket, &schedule, &results, &participants)?;

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(&viewer)?;
                fs::write(&output, json)
                    .with_context(|| format!("writing {}", output.display()))?;
                tracing::info!(path = %output.display(), "wrote viewer document");
            }

            println!("\n=== Leaderboard ===");
            println!("{:>4}  {:<20} {:>6} {:>6}", "RANK", "NAME", "SCORE", "MAX");
            for entry in &viewer.participants {
                println!(
                    "{:>4}  {:<20} {:>6} {:>6}",
                    entry.rank, entry.name, entry.score, entry.max_score
                );
            }
            println!(
                "\nEliminated: {} of {} entrants",
                viewer.eliminated_players.len(),
                bracket.all_entrants().len()
            );
        }

        Commands::Validate {
            entrants,
            bracket,
            results,
        } => {
            let new_bracket = ingest::parse_entrants_file(&entrants)
                .with_context(|| format!("parsing {}", entrants.display()))?;
            let old_bracket: Bracket = load_json::<Bracket>(&bracket)?.normalize_keys();

            let report = diff_players(&old_bracket, &new_bracket);
            println!("\n--- Data Validation Report ---");
            if report.added.is_empty() && report.removed.is_empty() {
                println!("No changes to player names found. Data is consistent.");
            } else {
                if !report.added.is_empty() {
                    println!("\nNew players added:");
                    for name in &report.added {
                        println!("  + {}", name);
                    }
                }
                if !report.removed.is_empty() {
                    println!("\nPlayers removed:");
                    for name in &report.removed {
                        println!("  - {}", name);
                    }
                }
                println!("\nReview the changes above before regenerating the bracket file.");
            }

            if let Some(results) = results {
                let results = load_results(&results)?;
                let issues = check_results(&old_bracket, &config, &results);
                if issues.is_empty() {
                    println!("\nResults file: {} entries, all consistent.", results.len());
                } else {
                    println!("\nResults file issues:");
                    for issue in &issues {
                        println!("  - {}", issue);
                    }
                }
            }
        }
    }

    Ok(())
}

/// Read and deserialize a JSON file.
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

/// Load a results file: either a bare map or a `{ "winners": { ... } }`
/// document as stored by the live service.
fn load_results(path: &Path) -> Result<ActualResults> {
    let value: serde_json::Value = load_json(path)?;
    let map = match value.get("winners") {
        Some(winners) => winners.clone(),
        None => value,
    };
    serde_json::from_value(map).with_context(|| format!("parsing winners in {}", path.display()))
}

struct PlayerDiff {
    added: Vec<String>,
    removed: Vec<String>,
}

/// Compare the player universes of two brackets, ignoring placeholders.
fn diff_players(old: &Bracket, new: &Bracket) -> PlayerDiff {
    let real_names = |b: &Bracket| -> BTreeSet<String> {
        b.all_entrants()
            .into_iter()
            .filter(|n| !n.is_empty() && !n.eq_ignore_ascii_case("TBD"))
            .collect()
    };

    let old_names = real_names(old);
    let new_names = real_names(new);
    PlayerDiff {
        added: new_names.difference(&old_names).cloned().collect(),
        removed: old_names.difference(&new_names).cloned().collect(),
    }
}

/// Sanity-check recorded results against a bracket: keys must parse and
/// resolve, and winners should be entrants from the original draw.
fn check_results(bracket: &Bracket, config: &AppConfig, results: &ActualResults) -> Vec<String> {
    let schedule = config.schedule();
    let entrants = bracket.all_entrants();
    let mut issues = Vec::new();

    for (key, winner) in results.iter() {
        match key.parse::<MatchRef>() {
            Ok(mref) => {
                if let Err(e) =
                    engine::resolve_occupants(bracket, &schedule, &mref, results)
                {
                    issues.push(format!("{}: {}", key, e));
                }
            }
            Err(e) => {
                issues.push(e.to_string());
                continue;
            }
        }
        if !entrants.contains(winner.name()) {
            issues.push(format!("{}: winner {:?} is not in the draw", key, winner.name()));
        }
    }

    issues
}
