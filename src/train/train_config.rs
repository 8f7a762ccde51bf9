/// Configuration for a `fit` run.
///
/// # Fields
/// - `epochs`       — number of epochs; each epoch runs one step per sample
/// - `batch_size`   — size of the sampling pool: every step draws an index
///                    uniformly from `[0, batch_size)`, with replacement.
///                    `0` means the whole dataset. This is not a mini-batch;
///                    updates are still applied after every sample.
/// - `seed`         — fixed RNG seed for reproducible runs; `None` seeds
///                    from OS entropy
/// - `report_every` — epochs between loss reports; `0` disables them
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub batch_size: usize,
    pub seed: Option<u64>,
    pub report_every: usize,
}

pub const DEFAULT_REPORT_EVERY: usize = 50;

impl TrainConfig {
    /// Creates a `TrainConfig` with an entropy seed and the default report interval.
    pub fn new(epochs: usize, batch_size: usize) -> Self {
        TrainConfig {
            epochs,
            batch_size,
            seed: None,
            report_every: DEFAULT_REPORT_EVERY,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_report_every(mut self, epochs: usize) -> Self {
        self.report_every = epochs;
        self
    }
}
