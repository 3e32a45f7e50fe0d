//! Block probability as a function of passes before the shot.
//!
//! For a pass count seen in the data the prediction is the empirical block
//! rate among shots with exactly that many passes; unseen counts fall back to
//! the overall block rate.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::ShotRecordStore;

/// Default decision boundary for calling a shot "blocked".
pub const DEFAULT_BLOCK_THRESHOLD: f64 = 0.5;

/// Result of a block prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockPrediction {
    /// `probability >= threshold`
    pub blocked: bool,
    pub probability: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct PassStats {
    shots: usize,
    blocked: usize,
}

#[derive(Debug, Clone, Default)]
pub struct BlockPredictor {
    by_passes: BTreeMap<u32, PassStats>,
    overall_block_probability: f64,
}

impl BlockPredictor {
    pub fn from_store(store: &ShotRecordStore) -> Self {
        let mut by_passes: BTreeMap<u32, PassStats> = BTreeMap::new();
        let mut total_blocked = 0usize;
        for r in store.records() {
            let s = by_passes.entry(r.passes_before_shot).or_default();
            s.shots += 1;
            if r.blocked {
                s.blocked += 1;
                total_blocked += 1;
            }
        }
        let overall_block_probability = if store.is_empty() {
            0.0
        } else {
            total_blocked as f64 / store.len() as f64
        };
        BlockPredictor {
            by_passes,
            overall_block_probability,
        }
    }

    /// Block probability for `passes`, with the overall rate as fallback.
    pub fn probability(&self, passes: u32) -> f64 {
        match self.by_passes.get(&passes) {
            Some(s) if s.shots > 0 => s.blocked as f64 / s.shots as f64,
            _ => self.overall_block_probability,
        }
    }

    pub fn predict(&self, passes: u32, threshold: f64) -> BlockPrediction {
        let probability = self.probability(passes);
        BlockPrediction {
            blocked: probability >= threshold,
            probability,
        }
    }

    pub fn overall_probability(&self) -> f64 {
        self.overall_block_probability
    }

    /// Shots observed with exactly `passes` passes (0 → fallback in use).
    pub fn sample_count(&self, passes: u32) -> usize {
        self.by_passes.get(&passes).map(|s| s.shots).unwrap_or(0)
    }

    /// Pass counts present in the data, ascending.
    pub fn observed_passes(&self) -> Vec<u32> {
        self.by_passes.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::models::ShotType;
    use crate::data::test_support::repeat;
    use approx::assert_relative_eq;

    fn store() -> ShotRecordStore {
        let mut v = Vec::new();
        // 3 passes: 7 of 10 blocked
        repeat(&mut v, "Alexis", ShotType::Normal, true, 3, false, 7);
        repeat(&mut v, "Alexis", ShotType::Normal, false, 3, true, 3);
        // 0 passes: 0 of 10 blocked
        repeat(&mut v, "Jakov", ShotType::Layup, false, 0, true, 10);
        ShotRecordStore::new(v)
    }

    #[test]
    fn threshold_decides_block_flag() {
        let p = BlockPredictor::from_store(&store());
        let at_half = p.predict(3, 0.5);
        assert!(at_half.blocked);
        assert_relative_eq!(at_half.probability, 0.7, epsilon = 1e-12);

        let strict = p.predict(3, 0.8);
        assert!(!strict.blocked);
        assert_relative_eq!(strict.probability, 0.7, epsilon = 1e-12);
    }

    #[test]
    fn probability_equal_to_threshold_counts_as_blocked() {
        let p = BlockPredictor::from_store(&store());
        assert!(p.predict(3, 0.7).blocked);
    }

    #[test]
    fn unseen_pass_count_uses_overall_rate() {
        let p = BlockPredictor::from_store(&store());
        assert_eq!(p.sample_count(9), 0);
        assert_relative_eq!(p.predict(9, DEFAULT_BLOCK_THRESHOLD).probability, 0.35, epsilon = 1e-12);
        assert_relative_eq!(p.overall_probability(), 0.35, epsilon = 1e-12);
        assert_eq!(p.observed_passes(), vec![0, 3]);
    }

    #[test]
    fn raising_threshold_never_turns_false_into_true() {
        let p = BlockPredictor::from_store(&store());
        for passes in [0, 3, 9] {
            let mut was_blocked = true;
            for step in 0..=20 {
                let t = step as f64 / 20.0;
                let blocked = p.predict(passes, t).blocked;
                assert!(!(blocked && !was_blocked), "passes={} t={}", passes, t);
                was_blocked = blocked;
            }
        }
    }

    #[test]
    fn empty_store_predicts_zero() {
        let p = BlockPredictor::from_store(&ShotRecordStore::default());
        let pred = p.predict(2, 0.5);
        assert_eq!(pred.probability, 0.0);
        assert!(!pred.blocked);
    }
}
