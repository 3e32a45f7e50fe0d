//! Closed-form expected points.
//!
//! Each assignment is treated as `Binomial(n, p_hit_eff)` where
//! `p_hit_eff = (1 − p_block)·p_unblocked + p_block·p_blocked`. This is the
//! analytic counterpart of [`super::monte_carlo`]: the Monte Carlo mean
//! converges to these numbers.

use serde::Serialize;

use super::team::Team;
use crate::data::models::ShotType;
use crate::model::binomial::{binomial_expectation, binomial_std_dev};
use crate::model::ShotModel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpectedAssignment {
    pub team: String,
    pub player: String,
    pub shot_type: ShotType,
    pub attempts: u32,
    pub p_block: f64,
    pub p_hit_eff: f64,
    pub expected_hits: f64,
    pub expected_points: f64,
    pub expected_blocks: f64,
    /// Standard deviation of the points scored by this assignment
    pub points_std_dev: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamExpectation {
    pub total_points: f64,
    pub total_blocks: f64,
    pub details: Vec<ExpectedAssignment>,
}

pub struct ExpectedValueEngine<'a> {
    model: &'a ShotModel,
}

impl<'a> ExpectedValueEngine<'a> {
    pub fn new(model: &'a ShotModel) -> Self {
        ExpectedValueEngine { model }
    }

    pub fn expected(&self, team: &Team, threshold: f64) -> TeamExpectation {
        let mut total_points = 0.0;
        let mut total_blocks = 0.0;
        let mut details = Vec::with_capacity(team.assignments.len());

        for a in &team.assignments {
            let (p_unblocked, p_blocked) = self.model.rates.hit_probs(&a.player, a.shot_type);
            let p_block = self
                .model
                .blocks
                .predict(a.passes_before_shot, threshold)
                .probability;
            let p_hit_eff = (1.0 - p_block) * p_unblocked + p_block * p_blocked;

            let per_hit = a.shot_type.points_per_hit() as f64;
            let expected_hits = binomial_expectation(a.attempts, p_hit_eff);
            let expected_points = expected_hits * per_hit;
            let expected_blocks = binomial_expectation(a.attempts, p_block);

            total_points += expected_points;
            total_blocks += expected_blocks;
            details.push(ExpectedAssignment {
                team: team.name.clone(),
                player: a.player.clone(),
                shot_type: a.shot_type,
                attempts: a.attempts,
                p_block,
                p_hit_eff,
                expected_hits,
                expected_points,
                expected_blocks,
                points_std_dev: binomial_std_dev(a.attempts, p_hit_eff) * per_hit,
            });
        }

        TeamExpectation {
            total_points,
            total_blocks,
            details,
        }
    }
}
