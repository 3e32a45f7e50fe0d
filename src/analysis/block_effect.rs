//! Does blocking lower a player's hit rate?
//!
//! For one player and shot type the attempts are split into a 2×2 table
//! (rows: unblocked / blocked, columns: hit / miss) and tested with a
//! one-sided Fisher exact test. The alternative is that the hit rate under
//! block is lower than without block. Significance levels are fixed at
//! 0.01 / 0.05 / 0.10.

use serde::Serialize;
use statrs::distribution::{DiscreteCDF, Hypergeometric};
use std::fmt;

use crate::data::models::ShotType;
use crate::data::ShotRecordStore;

/// Rendered in place of a p-value when the test could not be run.
pub const NO_P_VALUE: &str = "—";

/// Hit/miss counts split by block condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ContingencyTable {
    pub unblocked_hits: u32,
    pub unblocked_misses: u32,
    pub blocked_hits: u32,
    pub blocked_misses: u32,
}

impl ContingencyTable {
    pub fn unblocked_attempts(&self) -> u32 {
        self.unblocked_hits + self.unblocked_misses
    }

    pub fn blocked_attempts(&self) -> u32 {
        self.blocked_hits + self.blocked_misses
    }

    /// `[[unblocked_hits, unblocked_misses], [blocked_hits, blocked_misses]]`
    pub fn as_matrix(&self) -> [[u32; 2]; 2] {
        [
            [self.unblocked_hits, self.unblocked_misses],
            [self.blocked_hits, self.blocked_misses],
        ]
    }

    /// One-sided Fisher exact p-value for "blocked hit rate is lower".
    ///
    /// With all margins fixed the unblocked-hit cell is hypergeometric; a
    /// lower blocked rate shows up as a large unblocked-hit count, so the
    /// p-value is the upper tail `P(X >= unblocked_hits)`.
    pub fn fisher_exact_less_blocked(&self) -> f64 {
        if self.unblocked_hits == 0 {
            return 1.0;
        }
        let n_total = self.unblocked_attempts() + self.blocked_attempts();
        let hits = self.unblocked_hits + self.blocked_hits;
        match Hypergeometric::new(
            u64::from(n_total),
            u64::from(hits),
            u64::from(self.unblocked_attempts()),
        ) {
            // sf(k) = P(X > k)
            Ok(dist) => dist.sf(u64::from(self.unblocked_hits - 1)).clamp(0.0, 1.0),
            Err(_) => 1.0,
        }
    }
}

/// Strength of evidence for a block effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Evidence {
    HighlySignificant,
    Significant,
    Trend,
    None,
}

impl Evidence {
    pub fn from_p_value(p: f64) -> Evidence {
        if p < 0.01 {
            Evidence::HighlySignificant
        } else if p < 0.05 {
            Evidence::Significant
        } else if p < 0.10 {
            Evidence::Trend
        } else {
            Evidence::None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Evidence::HighlySignificant => "highly significant evidence of a block effect",
            Evidence::Significant => "significant evidence of a block effect",
            Evidence::Trend => "trend towards a block effect",
            Evidence::None => "no evidence of a block effect",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockEffectVerdict {
    pub player: String,
    /// Shot type as the caller spelled it
    pub shot_type: String,
    /// `None` when there was nothing to test
    pub table: Option<ContingencyTable>,
    pub p_value: Option<f64>,
    pub evidence: Evidence,
}

impl BlockEffectVerdict {
    fn neutral(player: &str, shot_type: &str, table: Option<ContingencyTable>) -> Self {
        BlockEffectVerdict {
            player: player.to_string(),
            shot_type: shot_type.to_string(),
            table,
            p_value: None,
            evidence: Evidence::None,
        }
    }
}

impl fmt::Display for BlockEffectVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = match self.p_value {
            Some(p) => format_significant(p, 4),
            None => NO_P_VALUE.to_string(),
        };
        write!(
            f,
            "In {} of {}, p-value = {}: {}",
            self.shot_type,
            self.player,
            p,
            self.evidence.label()
        )
    }
}

pub struct BlockEffectTest<'a> {
    store: &'a ShotRecordStore,
}

impl<'a> BlockEffectTest<'a> {
    pub fn new(store: &'a ShotRecordStore) -> Self {
        BlockEffectTest { store }
    }

    /// Counts for one player / shot type, or `None` without any record.
    pub fn contingency_table(&self, player: &str, shot_type: ShotType) -> Option<ContingencyTable> {
        let mut table = ContingencyTable::default();
        let mut any = false;
        for r in self.store.for_player_shot(player, shot_type) {
            any = true;
            match (r.blocked, r.hit) {
                (false, true) => table.unblocked_hits += 1,
                (false, false) => table.unblocked_misses += 1,
                (true, true) => table.blocked_hits += 1,
                (true, false) => table.blocked_misses += 1,
            }
        }
        any.then_some(table)
    }

    pub fn test(&self, player: &str, shot_type: &str) -> BlockEffectVerdict {
        let Some(st) = ShotType::from_alias(shot_type) else {
            return BlockEffectVerdict::neutral(player, shot_type, None);
        };
        let Some(table) = self.contingency_table(player, st) else {
            return BlockEffectVerdict::neutral(player, shot_type, None);
        };
        if table.blocked_attempts() == 0 {
            return BlockEffectVerdict::neutral(player, shot_type, Some(table));
        }

        let p = table.fisher_exact_less_blocked();
        BlockEffectVerdict {
            player: player.to_string(),
            shot_type: shot_type.to_string(),
            table: Some(table),
            p_value: Some(p),
            evidence: Evidence::from_p_value(p),
        }
    }
}

/// Format with `digits` significant digits, dropping trailing zeros; very
/// small or large values switch to exponent form (`1.235e-05`).
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let digits = digits.max(1);
    // Exponent of the value after rounding to `digits` significant digits.
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exp.parse().unwrap_or(0);
    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
