use crate::{error::Result, network::network::Network};

/// Runs one online training step on a single sample and returns its loss.
pub fn train_step(network: &mut Network, input: &[f64], target: &[f64]) -> Result<f64> {
    network.check_input(input)?;
    network.check_target(target)?;
    Ok(step(network, input, target))
}

/// Forward pass, output error, then backpropagation with immediate updates.
pub(crate) fn step(network: &mut Network, input: &[f64], target: &[f64]) -> f64 {
    network.propagate(input);
    network.compute_errors(target);
    network.backward();
    network.loss()
}
