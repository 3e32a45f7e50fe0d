pub mod expected;
pub mod monte_carlo;
pub mod orchestrator;
pub mod team;

pub use expected::{ExpectedAssignment, ExpectedValueEngine, TeamExpectation};
pub use monte_carlo::{AssignmentOutcome, MonteCarloSimulator, SimulationSummary, TeamSimulation};
pub use orchestrator::{ExpectedMatch, MatchOrchestrator, MatchResult, SeriesSummary, SimulatedMatch, Winner};
pub use team::{build_teams, MatchSpec, MAX_TEAM_ATTEMPTS, PlayerSpec, ShotAssignment, Team};
