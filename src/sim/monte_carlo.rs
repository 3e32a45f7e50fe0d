//! Monte Carlo match simulation.
//!
//! Every attempt is drawn independently: first whether the defence blocks it
//! (probability from the pass-count model), then whether it goes in (the
//! player's hit rate under that block condition). The random source is owned
//! by the caller so a fixed seed reproduces a fixed result.

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use super::team::Team;
use crate::data::models::ShotType;
use crate::model::ShotModel;

/// Sampled outcome of one assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentOutcome {
    pub team: String,
    pub player: String,
    pub shot_type: ShotType,
    pub attempts: u32,
    pub hits: u32,
    pub points: u32,
    pub blocks: u32,
}

/// One sampled run of a whole team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSimulation {
    pub total_points: u32,
    pub total_blocks: u32,
    pub details: Vec<AssignmentOutcome>,
}

/// Aggregate over repeated runs of one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub trials: usize,
    pub mean_points: f64,
    pub std_points: f64,
    pub mean_blocks: f64,
    pub min_points: u32,
    pub max_points: u32,
}

pub struct MonteCarloSimulator<'a> {
    model: &'a ShotModel,
}

impl<'a> MonteCarloSimulator<'a> {
    pub fn new(model: &'a ShotModel) -> Self {
        MonteCarloSimulator { model }
    }

    /// Simulate every attempt of `team` once.
    pub fn simulate<R: Rng + ?Sized>(&self, team: &Team, threshold: f64, rng: &mut R) -> TeamSimulation {
        let mut total_points = 0;
        let mut total_blocks = 0;
        let mut details = Vec::with_capacity(team.assignments.len());

        for a in &team.assignments {
            let (p_unblocked, p_blocked) = self.model.rates.hit_probs(&a.player, a.shot_type);
            let p_block = self
                .model
                .blocks
                .predict(a.passes_before_shot, threshold)
                .probability;

            let mut blocks = 0;
            let mut hits = 0;
            for _ in 0..a.attempts {
                let blocked = rng.gen_bool(p_block);
                let p_hit = if blocked {
                    blocks += 1;
                    p_blocked
                } else {
                    p_unblocked
                };
                if rng.gen_bool(p_hit) {
                    hits += 1;
                }
            }

            let points = hits * a.shot_type.points_per_hit();
            debug!(
                "{} {} {}: {}/{} hits, {} blocked, {} pts",
                team.name, a.player, a.shot_type, hits, a.attempts, blocks, points
            );
            total_points += points;
            total_blocks += blocks;
            details.push(AssignmentOutcome {
                team: team.name.clone(),
                player: a.player.clone(),
                shot_type: a.shot_type,
                attempts: a.attempts,
                hits,
                points,
                blocks,
            });
        }

        TeamSimulation {
            total_points,
            total_blocks,
            details,
        }
    }

    /// Run `trials` independent simulations and summarise the points.
    pub fn simulate_many<R: Rng + ?Sized>(
        &self,
        team: &Team,
        threshold: f64,
        trials: usize,
        rng: &mut R,
    ) -> SimulationSummary {
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut blocks = 0.0;
        let mut min_points = u32::MAX;
        let mut max_points = 0;
        for _ in 0..trials {
            let run = self.simulate(team, threshold, rng);
            let pts = run.total_points as f64;
            sum += pts;
            sum_sq += pts * pts;
            blocks += run.total_blocks as f64;
            min_points = min_points.min(run.total_points);
            max_points = max_points.max(run.total_points);
        }
        if trials == 0 {
            return SimulationSummary {
                trials,
                mean_points: 0.0,
                std_points: 0.0,
                mean_blocks: 0.0,
                min_points: 0,
                max_points: 0,
            };
        }
        let n = trials as f64;
        let mean_points = sum / n;
        SimulationSummary {
            trials,
            mean_points,
            std_points: (sum_sq / n - mean_points * mean_points).max(0.0).sqrt(),
            mean_blocks: blocks / n,
            min_points,
            max_points,
        }
    }
}
