use rand::Rng;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::info;

use super::expected::{ExpectedAssignment, ExpectedValueEngine};
use super::monte_carlo::{AssignmentOutcome, MonteCarloSimulator};
use super::team::{build_teams, PlayerSpec};
use crate::error::TeamBuildError;
use crate::model::ShotModel;

/// Match winner. Ties read "Draw" for a sampled match and "Equal" for an
/// expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner {
    Team(String),
    Draw,
    Equal,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Team(name) => f.write_str(name),
            Winner::Draw => f.write_str("Draw"),
            Winner::Equal => f.write_str("Equal"),
        }
    }
}

impl Serialize for Winner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of one orchestrated match. `S` is `u32` for a simulated match and
/// `f64` for an expectation; `D` is the matching per-assignment detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<S, D> {
    pub team1_name: String,
    pub team2_name: String,
    pub team1_score: S,
    pub team2_score: S,
    pub team1_blocks: S,
    pub team2_blocks: S,
    pub winner: Winner,
    /// Team 1 assignments followed by team 2 assignments
    pub details: Vec<D>,
}

pub type SimulatedMatch = MatchResult<u32, AssignmentOutcome>;
pub type ExpectedMatch = MatchResult<f64, ExpectedAssignment>;

/// Win/draw counts over repeated simulated matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub team1_name: String,
    pub team2_name: String,
    pub trials: usize,
    pub team1_wins: usize,
    pub team2_wins: usize,
    pub draws: usize,
    pub team1_mean_points: f64,
    pub team2_mean_points: f64,
}

fn pick_winner<S: PartialOrd>(team1: &str, s1: S, team2: &str, s2: S, tie: Winner) -> Winner {
    if s1 > s2 {
        Winner::Team(team1.to_string())
    } else if s2 > s1 {
        Winner::Team(team2.to_string())
    } else {
        tie
    }
}

/// Builds both teams from specs and runs one of the engines on them.
pub struct MatchOrchestrator<'a> {
    model: &'a ShotModel,
}

impl<'a> MatchOrchestrator<'a> {
    pub fn new(model: &'a ShotModel) -> Self {
        MatchOrchestrator { model }
    }

    /// Sample one match.
    pub fn simulate_match<R: Rng + ?Sized>(
        &self,
        team1_name: &str,
        team2_name: &str,
        specs: &[PlayerSpec],
        threshold: f64,
        rng: &mut R,
    ) -> Result<SimulatedMatch, TeamBuildError> {
        let (team1, team2) = build_teams(team1_name, team2_name, specs)?;
        let sim = MonteCarloSimulator::new(self.model);
        let r1 = sim.simulate(&team1, threshold, rng);
        let r2 = sim.simulate(&team2, threshold, rng);

        let winner = pick_winner(team1_name, r1.total_points, team2_name, r2.total_points, Winner::Draw);
        info!(
            "Simulated {} {} - {} {} (winner: {})",
            team1_name, r1.total_points, r2.total_points, team2_name, winner
        );

        let mut details = r1.details;
        details.extend(r2.details);
        Ok(MatchResult {
            team1_name: team1_name.to_string(),
            team2_name: team2_name.to_string(),
            team1_score: r1.total_points,
            team2_score: r2.total_points,
            team1_blocks: r1.total_blocks,
            team2_blocks: r2.total_blocks,
            winner,
            details,
        })
    }

    /// Closed-form expected match.
    pub fn expected_match(
        &self,
        team1_name: &str,
        team2_name: &str,
        specs: &[PlayerSpec],
        threshold: f64,
    ) -> Result<ExpectedMatch, TeamBuildError> {
        let (team1, team2) = build_teams(team1_name, team2_name, specs)?;
        let engine = ExpectedValueEngine::new(self.model);
        let e1 = engine.expected(&team1, threshold);
        let e2 = engine.expected(&team2, threshold);

        let winner = pick_winner(team1_name, e1.total_points, team2_name, e2.total_points, Winner::Equal);
        info!(
            "Expected {} {:.2} - {:.2} {} (better: {})",
            team1_name, e1.total_points, e2.total_points, team2_name, winner
        );

        let mut details = e1.details;
        details.extend(e2.details);
        Ok(MatchResult {
            team1_name: team1_name.to_string(),
            team2_name: team2_name.to_string(),
            team1_score: e1.total_points,
            team2_score: e2.total_points,
            team1_blocks: e1.total_blocks,
            team2_blocks: e2.total_blocks,
            winner,
            details,
        })
    }

    /// Sample `trials` matches from one validated team build.
    pub fn simulate_series<R: Rng + ?Sized>(
        &self,
        team1_name: &str,
        team2_name: &str,
        specs: &[PlayerSpec],
        threshold: f64,
        trials: usize,
        rng: &mut R,
    ) -> Result<SeriesSummary, TeamBuildError> {
        let (team1, team2) = build_teams(team1_name, team2_name, specs)?;
        let sim = MonteCarloSimulator::new(self.model);

        let mut summary = SeriesSummary {
            team1_name: team1_name.to_string(),
            team2_name: team2_name.to_string(),
            trials,
            team1_wins: 0,
            team2_wins: 0,
            draws: 0,
            team1_mean_points: 0.0,
            team2_mean_points: 0.0,
        };
        let (mut sum1, mut sum2) = (0u64, 0u64);
        for _ in 0..trials {
            let s1 = sim.simulate(&team1, threshold, rng).total_points;
            let s2 = sim.simulate(&team2, threshold, rng).total_points;
            sum1 += u64::from(s1);
            sum2 += u64::from(s2);
            match s1.cmp(&s2) {
                std::cmp::Ordering::Greater => summary.team1_wins += 1,
                std::cmp::Ordering::Less => summary.team2_wins += 1,
                std::cmp::Ordering::Equal => summary.draws += 1,
            }
        }
        if trials > 0 {
            summary.team1_mean_points = sum1 as f64 / trials as f64;
            summary.team2_mean_points = sum2 as f64 / trials as f64;
        }
        info!(
            "Series of {}: {} won {}, {} won {}, {} draw(s)",
            trials, team1_name, summary.team1_wins, team2_name, summary.team2_wins, summary.draws
        );
        Ok(summary)
    }
}
