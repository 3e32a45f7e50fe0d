use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use tracing::info;

use shot_sim::analysis::{player_report, BlockEffectTest};
use shot_sim::config::{Command, Config};
use shot_sim::data::loader::load_store_from_path;
use shot_sim::model::ShotModel;
use shot_sim::sim::{MatchOrchestrator, MatchSpec};

#[derive(Serialize)]
struct PassRow {
    passes: u32,
    total_shots: usize,
    blocked_shots: usize,
    points: u32,
    p_block: f64,
    predicted_blocked: bool,
}

fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let store = load_store_from_path(&config.data)
        .with_context(|| format!("Failed to load shot data from {}", config.data.display()))?;
    info!("Loaded {} shot record(s) from {}", store.len(), config.data.display());
    let model = ShotModel::from_store(&store);
    let threshold = config.threshold_block;

    match &config.command {
        Command::Simulate { match_file } => {
            let spec = read_match(match_file)?;
            let orchestrator = MatchOrchestrator::new(&model);
            let mut rng = match config.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            if config.trials > 1 {
                let series = orchestrator.simulate_series(
                    &spec.team1,
                    &spec.team2,
                    &spec.players,
                    threshold,
                    config.trials,
                    &mut rng,
                )?;
                print_json(&series)?;
            } else {
                let result = orchestrator.simulate_match(
                    &spec.team1,
                    &spec.team2,
                    &spec.players,
                    threshold,
                    &mut rng,
                )?;
                print_json(&result)?;
            }
        }
        Command::Expected { match_file } => {
            let spec = read_match(match_file)?;
            let result = MatchOrchestrator::new(&model).expected_match(
                &spec.team1,
                &spec.team2,
                &spec.players,
                threshold,
            )?;
            print_json(&result)?;
        }
        Command::BlockTest { player, shot_type } => {
            println!("{}", BlockEffectTest::new(&store).test(player, shot_type));
        }
        Command::PlayerStats { player } => match player_report(&store, player) {
            Some(report) => println!("{}", report),
            None => println!("No data for player {}", player),
        },
        Command::Passes => {
            let points: BTreeMap<u32, u32> = store
                .points_by_passes()
                .into_iter()
                .map(|p| (p.passes, p.points))
                .collect();
            let rows: Vec<PassRow> = store
                .block_counts_by_passes()
                .into_iter()
                .map(|c| {
                    let prediction = model.blocks.predict(c.passes, threshold);
                    PassRow {
                        passes: c.passes,
                        total_shots: c.total_shots,
                        blocked_shots: c.blocked_shots,
                        points: points.get(&c.passes).copied().unwrap_or(0),
                        p_block: prediction.probability,
                        predicted_blocked: prediction.blocked,
                    }
                })
                .collect();
            print_json(&rows)?;
        }
        Command::BlockTallies => {
            print_json(&store.hit_counts_by_player_block())?;
        }
    }

    Ok(())
}

fn read_match(path: &Path) -> Result<MatchSpec> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open match file {}", path.display()))?;
    serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse match file {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
