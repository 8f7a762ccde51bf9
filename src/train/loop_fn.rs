use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{NetError, Result};
use crate::metrics::confusion::ConfusionMatrix;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::step;

/// Outcome of a `fit` run.
#[derive(Debug, Clone)]
pub struct FitReport {
    /// One entry per report interval.
    pub history: Vec<EpochStats>,
    /// Confusion matrix over the full training set after the last epoch.
    pub confusion: ConfusionMatrix,
}

impl FitReport {
    pub fn f_measure(&self) -> f64 {
        self.confusion.f_measure()
    }
}

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` by online SGD, then evaluates it on the training set.
///
/// Every epoch runs `targets.len()` steps. Each step draws one sample index
/// uniformly from the sampling pool (see `TrainConfig::batch_size`), with
/// replacement, and runs forward, error and backward passes on it.
///
/// # Errors
/// - `ShapeMismatch` if `inputs` and `targets` differ in length or any vector
///   disagrees with the network's input/output size.
/// - `InvalidConfig` if `batch_size` exceeds the dataset size.
///
/// Both are reported before any weight is touched.
pub fn fit(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<FitReport> {
    network.check_dataset(inputs, targets)?;

    let pool = if config.batch_size == 0 { inputs.len() } else { config.batch_size };
    if pool > inputs.len() {
        return Err(NetError::InvalidConfig(format!(
            "batch size {} exceeds dataset size {}",
            pool,
            inputs.len()
        )));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    log::info!(
        "fit starting: samples={} epochs={} sampling_pool={}",
        inputs.len(),
        config.epochs,
        pool
    );

    let started = Instant::now();
    let mut window = Instant::now();
    let mut history = Vec::new();

    for epoch in 1..=config.epochs {
        for _ in 0..targets.len() {
            let idx = rng.gen_range(0..pool);
            step(network, &inputs[idx], &targets[idx]);
        }

        if config.report_every > 0 && epoch % config.report_every == 0 {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                loss: network.loss(),
                elapsed_ms: window.elapsed().as_millis() as u64,
            };
            log::info!("epoch {}/{}, loss: {}", stats.epoch, stats.total_epochs, stats.loss);
            history.push(stats);
            window = Instant::now();
        }
    }

    let confusion = ConfusionMatrix::evaluate(network, inputs, targets)?;
    log::info!(
        "fit finished in {:?}: F-measure {:.4}%",
        started.elapsed(),
        confusion.f_measure() * 100.0
    );

    Ok(FitReport { history, confusion })
}
