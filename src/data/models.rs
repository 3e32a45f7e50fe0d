use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of shot attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    /// Regular field goal ("wurf" in the dataset)
    Normal,
    /// Three-point attempt ("3er-wurf")
    ThreePointer,
    Layup,
}

impl ShotType {
    pub const ALL: [ShotType; 3] = [ShotType::Normal, ShotType::ThreePointer, ShotType::Layup];

    /// Points awarded for a successful attempt of this type.
    pub fn points_per_hit(self) -> u32 {
        match self {
            ShotType::ThreePointer => 3,
            ShotType::Normal | ShotType::Layup => 2,
        }
    }

    /// Label used by the recorded dataset.
    pub fn label(self) -> &'static str {
        match self {
            ShotType::Normal => "wurf",
            ShotType::ThreePointer => "3er-wurf",
            ShotType::Layup => "layup",
        }
    }

    /// Parse a canonical label (dataset or English spelling), trimmed and
    /// case-insensitive.
    pub fn from_label(s: &str) -> Option<ShotType> {
        match s.trim().to_lowercase().as_str() {
            "wurf" | "normal" => Some(ShotType::Normal),
            "3er-wurf" | "three-pointer" | "three_pointer" => Some(ShotType::ThreePointer),
            "layup" => Some(ShotType::Layup),
            _ => None,
        }
    }

    /// Parse the loose spellings people type at the prompt ("3", "dreier",
    /// "lay-up", ...). Falls back to [`ShotType::from_label`].
    pub fn from_alias(s: &str) -> Option<ShotType> {
        match s.trim().to_lowercase().as_str() {
            "lay-up" | "lay up" => Some(ShotType::Layup),
            "3-wurf" | "3er" | "dreier" | "3" | "three" | "3pt" => Some(ShotType::ThreePointer),
            "shot" | "jumper" => Some(ShotType::Normal),
            other => ShotType::from_label(other),
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded shot attempt. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotRecord {
    pub player_name: String,
    pub shot_type: ShotType,
    /// Whether the defence blocked / contested the attempt
    pub blocked: bool,
    /// Passes immediately preceding the shot
    pub passes_before_shot: u32,
    pub hit: bool,
}

impl ShotRecord {
    pub fn new(
        player_name: impl Into<String>,
        shot_type: ShotType,
        blocked: bool,
        passes_before_shot: u32,
        hit: bool,
    ) -> Self {
        ShotRecord {
            player_name: player_name.into(),
            shot_type,
            blocked,
            passes_before_shot,
            hit,
        }
    }

    /// Points this attempt scored.
    pub fn points(&self) -> u32 {
        if self.hit {
            self.shot_type.points_per_hit()
        } else {
            0
        }
    }

    /// Case-insensitive player match after trimming both sides.
    pub fn is_player(&self, key: &str) -> bool {
        normalize_name(&self.player_name) == key
    }
}

/// Lookup key for player names: trimmed, lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Total vs. blocked shots for one pass count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassBlockCount {
    pub passes: u32,
    pub total_shots: usize,
    pub blocked_shots: usize,
}

/// Points scored after a given number of passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassPoints {
    pub passes: u32,
    pub points: u32,
}

/// Hit / miss tally for one player under one block condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerBlockTally {
    pub player: String,
    pub blocked: bool,
    pub hits: usize,
    pub misses: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_pointer_scores_three() {
        assert_eq!(ShotType::ThreePointer.points_per_hit(), 3);
        assert_eq!(ShotType::Normal.points_per_hit(), 2);
        assert_eq!(ShotType::Layup.points_per_hit(), 2);
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(ShotType::from_label("  WURF "), Some(ShotType::Normal));
        assert_eq!(ShotType::from_label("3er-Wurf"), Some(ShotType::ThreePointer));
        assert_eq!(ShotType::from_label("three-pointer"), Some(ShotType::ThreePointer));
        assert_eq!(ShotType::from_label("dreier"), None);
    }

    #[test]
    fn aliases_map_to_three_pointer() {
        for alias in ["3", "dreier", "3-wurf", "3er", "3er-wurf"] {
            assert_eq!(ShotType::from_alias(alias), Some(ShotType::ThreePointer), "{}", alias);
        }
        assert_eq!(ShotType::from_alias("Lay Up"), Some(ShotType::Layup));
        assert_eq!(ShotType::from_alias("wurf"), Some(ShotType::Normal));
        assert_eq!(ShotType::from_alias("dunk"), None);
    }

    #[test]
    fn missed_shot_scores_nothing() {
        let miss = ShotRecord::new("Mia", ShotType::ThreePointer, false, 2, false);
        let hit = ShotRecord::new("Mia", ShotType::ThreePointer, false, 2, true);
        assert_eq!(miss.points(), 0);
        assert_eq!(hit.points(), 3);
    }

    #[test]
    fn player_match_ignores_case_and_whitespace() {
        let rec = ShotRecord::new(" Alexis ", ShotType::Normal, false, 0, true);
        assert!(rec.is_player(&normalize_name("ALEXIS")));
        assert!(!rec.is_player(&normalize_name("Alex")));
    }
}
