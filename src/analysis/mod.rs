pub mod block_effect;
pub mod player_stats;

pub use block_effect::{BlockEffectTest, BlockEffectVerdict, ContingencyTable, Evidence};
pub use player_stats::{player_report, PlayerReport};
