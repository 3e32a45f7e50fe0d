use thiserror::Error;

use crate::sim::team::MAX_TEAM_ATTEMPTS;

/// Validation failures raised while turning player specs into teams.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamBuildError {
    #[error("attempt mismatch for player {player}: total={total}, breakdown={breakdown}")]
    AttemptMismatch {
        player: String,
        total: u32,
        breakdown: u32,
    },

    #[error("invalid team name '{team}' for player {player}; allowed: '{team1}' or '{team2}'")]
    InvalidTeamName {
        player: String,
        team: String,
        team1: String,
        team2: String,
    },

    #[error("team '{team}' exceeds {max} attempts ({total})", max = MAX_TEAM_ATTEMPTS)]
    TeamAttemptsExceeded { team: String, total: u32 },
}

/// Failures while reading shot records from CSV.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read shot data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("line {line}: invalid {field} value '{value}'")]
    InvalidValue {
        line: usize,
        field: &'static str,
        value: String,
    },
}
