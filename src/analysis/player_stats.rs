use serde::Serialize;
use std::fmt;

use crate::data::models::ShotType;
use crate::data::ShotRecordStore;
use crate::model::ConditionalRateModel;

/// Hit rates for one shot type, rounded to three decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotTypeRates {
    pub shot_type: ShotType,
    pub attempts: usize,
    pub overall: f64,
    pub unblocked: f64,
    pub blocked: f64,
}

/// Per-player shooting summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerReport {
    pub player: String,
    pub total_shots: usize,
    pub by_shot_type: Vec<ShotTypeRates>,
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Summary for `player`, or `None` when the player has no records.
pub fn player_report(store: &ShotRecordStore, player: &str) -> Option<PlayerReport> {
    let total_shots = store.for_player(player).count();
    if total_shots == 0 {
        return None;
    }
    let rates = ConditionalRateModel::from_store(store);
    let by_shot_type = ShotType::ALL
        .iter()
        .map(|&st| ShotTypeRates {
            shot_type: st,
            attempts: rates.sample_count(player, st, false) + rates.sample_count(player, st, true),
            overall: round3(rates.overall_rate(player, st)),
            unblocked: round3(rates.rate(player, st, false)),
            blocked: round3(rates.rate(player, st, true)),
        })
        .collect();
    Some(PlayerReport {
        player: player.trim().to_string(),
        total_shots,
        by_shot_type,
    })
}

impl fmt::Display for PlayerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player: {}", self.player)?;
        write!(f, "Total shots: {}", self.total_shots)?;
        for r in &self.by_shot_type {
            write!(
                f,
                "\nHit rate {} = {:.2} (unblocked = {:.2}, blocked = {:.2})",
                r.shot_type, r.overall, r.unblocked, r.blocked
            )?;
        }
        Ok(())
    }
}
