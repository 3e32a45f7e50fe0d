//! Conditional hit-rate table.
//!
//! Rates are empirical means of `hit` over every record matching
//! (player, shot type, block flag). Cells with no records resolve to `0.0`:
//! absence of evidence is treated as a zero rate, not an error. Callers that
//! need to tell the two apart use [`ConditionalRateModel::sample_count`].

use std::collections::HashMap;

use crate::data::models::{normalize_name, ShotType};
use crate::data::ShotRecordStore;

#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    attempts: usize,
    hits: usize,
}

impl Cell {
    fn rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.hits as f64 / self.attempts as f64
        }
    }
}

/// Cached (player, shot type, blocked) → hit rate mapping.
#[derive(Debug, Clone, Default)]
pub struct ConditionalRateModel {
    cells: HashMap<(String, ShotType, bool), Cell>,
}

impl ConditionalRateModel {
    pub fn from_store(store: &ShotRecordStore) -> Self {
        let mut cells: HashMap<(String, ShotType, bool), Cell> = HashMap::new();
        for r in store.records() {
            let cell = cells
                .entry((normalize_name(&r.player_name), r.shot_type, r.blocked))
                .or_default();
            cell.attempts += 1;
            if r.hit {
                cell.hits += 1;
            }
        }
        ConditionalRateModel { cells }
    }

    fn cell(&self, player: &str, shot_type: ShotType, blocked: bool) -> Cell {
        self.cells
            .get(&(normalize_name(player), shot_type, blocked))
            .copied()
            .unwrap_or_default()
    }

    /// Hit rate in [0, 1]; `0.0` when there is no matching record.
    pub fn rate(&self, player: &str, shot_type: ShotType, blocked: bool) -> f64 {
        self.cell(player, shot_type, blocked).rate()
    }

    /// Same as [`rate`](Self::rate) with a textual shot type. Unknown labels
    /// resolve to `0.0`.
    pub fn rate_by_label(&self, player: &str, shot_type: &str, blocked: bool) -> f64 {
        ShotType::from_label(shot_type)
            .map(|st| self.rate(player, st, blocked))
            .unwrap_or(0.0)
    }

    /// `(p_unblocked, p_blocked)` for a player / shot type.
    pub fn hit_probs(&self, player: &str, shot_type: ShotType) -> (f64, f64) {
        (
            self.rate(player, shot_type, false),
            self.rate(player, shot_type, true),
        )
    }

    /// Hit rate ignoring the block flag.
    pub fn overall_rate(&self, player: &str, shot_type: ShotType) -> f64 {
        let nb = self.cell(player, shot_type, false);
        let b = self.cell(player, shot_type, true);
        Cell {
            attempts: nb.attempts + b.attempts,
            hits: nb.hits + b.hits,
        }
        .rate()
    }

    /// Number of records behind a rate cell.
    pub fn sample_count(&self, player: &str, shot_type: ShotType, blocked: bool) -> usize {
        self.cell(player, shot_type, blocked).attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::{mia_records, repeat};
    use approx::assert_relative_eq;

    #[test]
    fn mia_three_pointer_rates() {
        let store = ShotRecordStore::new(mia_records());
        let model = ConditionalRateModel::from_store(&store);
        assert_relative_eq!(model.rate("Mia", ShotType::ThreePointer, false), 0.6, epsilon = 1e-12);
        assert_relative_eq!(model.rate("Mia", ShotType::ThreePointer, true), 0.2, epsilon = 1e-12);
        assert_relative_eq!(model.overall_rate("mia", ShotType::ThreePointer), 7.0 / 15.0, epsilon = 1e-12);
    }

    #[test]
    fn lookup_is_trimmed_and_case_insensitive() {
        let store = ShotRecordStore::new(mia_records());
        let model = ConditionalRateModel::from_store(&store);
        assert_relative_eq!(model.rate("  MIA ", ShotType::ThreePointer, false), 0.6, epsilon = 1e-12);
        assert_relative_eq!(model.rate_by_label("mia", " 3ER-WURF", true), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn missing_data_is_zero_and_distinguishable_by_count() {
        let mut v = mia_records();
        // Mia shoots layups only unblocked, always missing
        repeat(&mut v, "Mia", ShotType::Layup, false, 0, false, 4);
        let model = ConditionalRateModel::from_store(&ShotRecordStore::new(v));

        assert_eq!(model.rate("Mia", ShotType::Layup, false), 0.0);
        assert_eq!(model.sample_count("Mia", ShotType::Layup, false), 4);

        assert_eq!(model.rate("Mia", ShotType::Layup, true), 0.0);
        assert_eq!(model.sample_count("Mia", ShotType::Layup, true), 0);

        assert_eq!(model.rate("Unknown", ShotType::Normal, false), 0.0);
        assert_eq!(model.rate_by_label("Mia", "hook", false), 0.0);
        assert_eq!(model.hit_probs("Mia", ShotType::Normal), (0.0, 0.0));
    }
}
