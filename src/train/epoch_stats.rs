use serde::{Deserialize, Serialize};

/// Progress snapshot recorded by `fit` once every `report_every` epochs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Loss of the last sample trained in this epoch, not an epoch mean.
    pub loss: f64,
    /// Wall-clock time since the previous snapshot, in milliseconds.
    pub elapsed_ms: u64,
}
