use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Basketball shot modelling and match simulation
#[derive(Parser, Debug, Clone)]
#[command(name = "shot-sim", version, about)]
pub struct Config {
    /// Shot records CSV (`;`-separated)
    #[arg(long, env = "SHOT_DATA_PATH", default_value = "Basketball_Daten.csv")]
    pub data: PathBuf,

    /// Block probability at or above which a shot is predicted "blocked"
    #[arg(long, env = "THRESHOLD_BLOCK", default_value = "0.5")]
    pub threshold_block: f64,

    /// Seed for the Monte Carlo generator (random when omitted)
    #[arg(long, env = "SIM_SEED")]
    pub seed: Option<u64>,

    /// Number of simulated matches; more than one prints a series summary
    #[arg(long, env = "SIM_TRIALS", default_value = "1")]
    pub trials: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Simulate a match between two rosters
    Simulate {
        /// Match file (JSON: team1, team2, players)
        #[arg(long = "match")]
        match_file: PathBuf,
    },
    /// Closed-form expected score of a match
    Expected {
        #[arg(long = "match")]
        match_file: PathBuf,
    },
    /// Test whether blocking lowers a player's hit rate
    BlockTest { player: String, shot_type: String },
    /// Hit-rate summary for one player
    PlayerStats { player: String },
    /// Block probability and points scored per pass count
    Passes,
    /// Hit / miss counts per player, split by block condition
    BlockTallies,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.threshold_block) {
            anyhow::bail!("threshold_block must be between 0.0 and 1.0");
        }
        if self.trials == 0 {
            anyhow::bail!("trials must be at least 1");
        }
        Ok(())
    }
}
