//! Team construction from declarative per-player specs.

use serde::{Deserialize, Serialize};

use crate::data::models::ShotType;
use crate::error::TeamBuildError;

/// Maximum attempts one team may take in a single match.
pub const MAX_TEAM_ATTEMPTS: u32 = 100;

/// How many shots of each type a player takes in a match, and after how
/// many passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub player: String,
    pub team: String,
    pub total_attempts: u32,
    #[serde(default)]
    pub normal: u32,
    #[serde(default)]
    pub three_pointers: u32,
    #[serde(default)]
    pub layups: u32,
    #[serde(default)]
    pub passes: u32,
}

impl PlayerSpec {
    /// Start a spec with no attempts of any type.
    pub fn new(player: impl Into<String>, team: impl Into<String>, total_attempts: u32) -> Self {
        PlayerSpec {
            player: player.into(),
            team: team.into(),
            total_attempts,
            normal: 0,
            three_pointers: 0,
            layups: 0,
            passes: 0,
        }
    }

    pub fn normal(mut self, n: u32) -> Self {
        self.normal = n;
        self
    }

    pub fn three_pointers(mut self, n: u32) -> Self {
        self.three_pointers = n;
        self
    }

    pub fn layups(mut self, n: u32) -> Self {
        self.layups = n;
        self
    }

    pub fn passes(mut self, passes: u32) -> Self {
        self.passes = passes;
        self
    }

    /// Sum of the per-type breakdown.
    pub fn breakdown(&self) -> u32 {
        self.normal + self.three_pointers + self.layups
    }

    fn attempts_by_type(&self) -> [(ShotType, u32); 3] {
        [
            (ShotType::Normal, self.normal),
            (ShotType::ThreePointer, self.three_pointers),
            (ShotType::Layup, self.layups),
        ]
    }
}

/// A full match description as read from a match file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpec {
    pub team1: String,
    pub team2: String,
    pub players: Vec<PlayerSpec>,
}

/// One player's attempts of one shot type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShotAssignment {
    pub player: String,
    pub shot_type: ShotType,
    pub passes_before_shot: u32,
    pub attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    pub assignments: Vec<ShotAssignment>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Team {
            name: name.into(),
            assignments: Vec::new(),
        }
    }

    pub fn total_attempts(&self) -> u32 {
        self.assignments.iter().map(|a| a.attempts).sum()
    }

    /// Attempts assigned to one player across all shot types.
    pub fn attempts_for(&self, player: &str) -> u32 {
        self.assignments
            .iter()
            .filter(|a| a.player == player)
            .map(|a| a.attempts)
            .sum()
    }
}

/// Validate `specs` and split them into the two named teams.
///
/// Per-player checks fail on the first offending spec; the per-team attempt
/// budget is checked only after every spec has been accepted.
pub fn build_teams(
    team1_name: &str,
    team2_name: &str,
    specs: &[PlayerSpec],
) -> Result<(Team, Team), TeamBuildError> {
    let mut team1 = Team::new(team1_name);
    let mut team2 = Team::new(team2_name);

    for spec in specs {
        let breakdown = spec.breakdown();
        if spec.total_attempts != breakdown {
            return Err(TeamBuildError::AttemptMismatch {
                player: spec.player.clone(),
                total: spec.total_attempts,
                breakdown,
            });
        }

        let team = if spec.team == team1_name {
            &mut team1
        } else if spec.team == team2_name {
            &mut team2
        } else {
            return Err(TeamBuildError::InvalidTeamName {
                player: spec.player.clone(),
                team: spec.team.clone(),
                team1: team1_name.to_string(),
                team2: team2_name.to_string(),
            });
        };

        for (shot_type, attempts) in spec.attempts_by_type() {
            if attempts > 0 {
                team.assignments.push(ShotAssignment {
                    player: spec.player.clone(),
                    shot_type,
                    passes_before_shot: spec.passes,
                    attempts,
                });
            }
        }
    }

    for team in [&team1, &team2] {
        let total = team.total_attempts();
        if total > MAX_TEAM_ATTEMPTS {
            return Err(TeamBuildError::TeamAttemptsExceeded {
                team: team.name.clone(),
                total,
            });
        }
    }

    Ok((team1, team2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<PlayerSpec> {
        vec![
            PlayerSpec::new("Alexis", "Red", 10).normal(5).three_pointers(3).layups(2).passes(2),
            PlayerSpec::new("Jakov", "Blue", 8).three_pointers(8).passes(4),
            PlayerSpec::new("Loukas", "Red", 6).normal(6),
        ]
    }

    #[test]
    fn builds_assignments_per_shot_type() {
        let (red, blue) = build_teams("Red", "Blue", &roster()).unwrap();
        assert_eq!(red.name, "Red");
        assert_eq!(red.assignments.len(), 4);
        assert_eq!(red.assignments[0].shot_type, ShotType::Normal);
        assert_eq!(red.assignments[1].shot_type, ShotType::ThreePointer);
        assert_eq!(red.assignments[2].shot_type, ShotType::Layup);
        assert_eq!(red.assignments[2].passes_before_shot, 2);
        assert_eq!(red.assignments[3].player, "Loukas");
        assert_eq!(blue.assignments.len(), 1);
        assert_eq!(blue.assignments[0].attempts, 8);
    }

    #[test]
    fn zero_attempt_types_are_omitted() {
        let (red, _) = build_teams("Red", "Blue", &roster()).unwrap();
        assert!(red.assignments.iter().all(|a| a.attempts > 0));
    }

    #[test]
    fn per_player_sums_match_declared_totals() {
        let specs = roster();
        let (red, blue) = build_teams("Red", "Blue", &specs).unwrap();
        for spec in &specs {
            let team = if spec.team == "Red" { &red } else { &blue };
            assert_eq!(team.attempts_for(&spec.player), spec.total_attempts);
        }
        assert_eq!(red.total_attempts(), 16);
        assert!(blue.total_attempts() <= MAX_TEAM_ATTEMPTS);
    }

    #[test]
    fn mismatched_breakdown_is_rejected() {
        let specs = vec![PlayerSpec::new("Mia", "Red", 10).normal(4).layups(5)];
        let err = build_teams("Red", "Blue", &specs).unwrap_err();
        assert_eq!(
            err,
            TeamBuildError::AttemptMismatch {
                player: "Mia".into(),
                total: 10,
                breakdown: 9
            }
        );
    }

    #[test]
    fn unknown_team_name_is_rejected() {
        let specs = vec![PlayerSpec::new("Mia", "Green", 1).normal(1)];
        match build_teams("Red", "Blue", &specs) {
            Err(TeamBuildError::InvalidTeamName { player, team, .. }) => {
                assert_eq!(player, "Mia");
                assert_eq!(team, "Green");
            }
            other => panic!("Expected InvalidTeamName, got {:?}", other),
        }
    }

    #[test]
    fn per_player_errors_surface_before_budget_errors() {
        let specs = vec![
            PlayerSpec::new("A", "Red", 60).normal(60),
            PlayerSpec::new("B", "Red", 60).normal(60),
            PlayerSpec::new("C", "Red", 3).normal(1),
        ];
        assert!(matches!(
            build_teams("Red", "Blue", &specs),
            Err(TeamBuildError::AttemptMismatch { .. })
        ));
    }

    #[test]
    fn team_over_budget_is_rejected() {
        let specs = vec![
            PlayerSpec::new("A", "Blue", 60).three_pointers(60),
            PlayerSpec::new("B", "Blue", 41).layups(41),
        ];
        assert_eq!(
            build_teams("Red", "Blue", &specs).unwrap_err(),
            TeamBuildError::TeamAttemptsExceeded {
                team: "Blue".into(),
                total: 101
            }
        );
    }

    #[test]
    fn first_team_over_budget_is_reported_first() {
        let specs = vec![
            PlayerSpec::new("A", "Blue", 101).layups(101),
            PlayerSpec::new("B", "Red", 120).normal(120),
        ];
        assert_eq!(
            build_teams("Red", "Blue", &specs).unwrap_err(),
            TeamBuildError::TeamAttemptsExceeded {
                team: "Red".into(),
                total: 120
            }
        );
    }

    #[test]
    fn exactly_one_hundred_attempts_is_allowed() {
        let specs = vec![PlayerSpec::new("A", "Red", 100).normal(50).layups(50)];
        let (red, blue) = build_teams("Red", "Blue", &specs).unwrap();
        assert_eq!(red.total_attempts(), 100);
        assert!(blue.assignments.is_empty());
    }

    #[test]
    fn spec_deserializes_with_defaults() {
        let spec: PlayerSpec =
            serde_json::from_str(r#"{"player":"Mia","team":"Red","total_attempts":4,"layups":4}"#)
                .unwrap();
        assert_eq!(spec, PlayerSpec::new("Mia", "Red", 4).layups(4));
    }

    #[test]
    fn match_spec_from_json() {
        let m: MatchSpec = serde_json::from_str(
            r#"{"team1":"Red","team2":"Blue","players":[
                {"player":"Mia","team":"Red","total_attempts":3,"normal":1,"three_pointers":2,"passes":1},
                {"player":"Jakov","team":"Blue","total_attempts":2,"layups":2}
            ]}"#,
        )
        .unwrap();
        let (red, blue) = build_teams(&m.team1, &m.team2, &m.players).unwrap();
        assert_eq!(red.total_attempts(), 3);
        assert_eq!(blue.assignments[0].shot_type, ShotType::Layup);
    }
}
