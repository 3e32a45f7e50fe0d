pub mod binomial;
pub mod block_predictor;
pub mod hit_rate;

pub use block_predictor::{BlockPrediction, BlockPredictor, DEFAULT_BLOCK_THRESHOLD};
pub use hit_rate::ConditionalRateModel;

use tracing::debug;

use crate::data::ShotRecordStore;

/// Both fitted tables, built once from a record store and read by the
/// simulation and expectation engines.
#[derive(Debug, Clone, Default)]
pub struct ShotModel {
    pub rates: ConditionalRateModel,
    pub blocks: BlockPredictor,
}

impl ShotModel {
    pub fn from_store(store: &ShotRecordStore) -> Self {
        let blocks = BlockPredictor::from_store(store);
        debug!(
            "Fitted shot model on {} record(s); overall block probability {:.3}",
            store.len(),
            blocks.overall_probability()
        );
        ShotModel {
            rates: ConditionalRateModel::from_store(store),
            blocks,
        }
    }
}
