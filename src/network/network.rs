use std::fmt;
use std::io::Write;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    activation::activation::ActivationFunction,
    error::{NetError, Result},
    layers::{dense::Layer, neuron::Neuron},
    loss::loss_type::LossType,
    math::vector,
    network::config::NetworkConfig,
    optim::sgd::Sgd,
    train::{loop_fn::FitReport, train_config::TrainConfig},
};

/// Winning output neuron after a forward pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Prediction {
    pub index: usize,
    pub value: f64,
}

/// Multi-layer perceptron, input layer first.
///
/// Only the function names are serialized; the function values themselves are
/// rebound from those names by `load_json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    layers: Vec<Layer>,
    #[serde(rename = "learning-rate")]
    learning_rate: f64,
    #[serde(rename = "activation-function-name")]
    activation_name: String,
    #[serde(rename = "loss-function-name")]
    cost_name: String,
    #[serde(skip)]
    activation: ActivationFunction,
    #[serde(skip)]
    cost: LossType,
    #[serde(default)]
    loss: f64,
}

impl Network {
    /// Builds a network with parameters drawn from the thread-local RNG.
    pub fn new(config: &NetworkConfig) -> Result<Network> {
        Network::with_rng(config, &mut rand::thread_rng())
    }

    /// Builds a network with weights and biases drawn uniformly from [0, 1).
    pub fn with_rng<R: Rng + ?Sized>(config: &NetworkConfig, rng: &mut R) -> Result<Network> {
        config.validate()?;

        log::info!(
            "configuring network: layers={:?} activation={} cost={} learning_rate={}",
            config.layers,
            config.activation_function,
            config.cost_function,
            config.learning_rate
        );

        let sizes = &config.layers;
        let layers = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| Layer::new(size, sizes.get(i + 1).copied(), &mut *rng))
            .collect();

        Ok(Network {
            layers,
            learning_rate: config.learning_rate,
            activation_name: config.activation_function.clone(),
            cost_name: config.cost_function.clone(),
            activation: ActivationFunction::from_name(&config.activation_function),
            cost: LossType::from_name(&config.cost_function),
            loss: 0.0,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn neuron(&self, layer: usize, index: usize) -> Option<&Neuron> {
        self.layers.get(layer)?.neurons.get(index)
    }

    /// Neuron count per layer, input first.
    pub fn topology(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::size).collect()
    }

    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, Layer::size)
    }

    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, Layer::size)
    }

    /// Output activations as left by the most recent forward pass.
    pub fn output(&self) -> Vec<f64> {
        self.layers.last().map(Layer::values).unwrap_or_default()
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Loss of the most recent training sample.
    pub fn loss(&self) -> f64 {
        self.loss
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    pub fn cost(&self) -> LossType {
        self.cost
    }

    pub fn activation_name(&self) -> &str {
        &self.activation_name
    }

    pub fn cost_name(&self) -> &str {
        &self.cost_name
    }

    // ── Shape checks ──────────────────────────────────────────────────────

    pub(crate) fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.input_size() {
            return Err(NetError::shape("input vector", self.input_size(), input.len()));
        }
        Ok(())
    }

    pub(crate) fn check_target(&self, target: &[f64]) -> Result<()> {
        if target.len() != self.output_size() {
            return Err(NetError::shape("target vector", self.output_size(), target.len()));
        }
        Ok(())
    }

    /// Validates a whole dataset before anything is mutated.
    pub(crate) fn check_dataset(&self, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<()> {
        if inputs.len() != targets.len() {
            return Err(NetError::shape("dataset length", inputs.len(), targets.len()));
        }
        for (input, target) in inputs.iter().zip(targets) {
            self.check_input(input)?;
            self.check_target(target)?;
        }
        Ok(())
    }

    // ── Forward / backward ────────────────────────────────────────────────

    /// Runs a forward pass and returns the output activations.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_input(input)?;
        self.propagate(input);
        Ok(self.output())
    }

    /// Forward pass without shape validation.
    pub(crate) fn propagate(&mut self, input: &[f64]) {
        let activation = self.activation;
        if let Some(first) = self.layers.first_mut() {
            first.load_inputs(input);
        }
        for i in 1..self.layers.len() {
            let (head, tail) = self.layers.split_at_mut(i);
            head[i - 1].feed_into(&mut tail[0], activation);
        }
    }

    /// Sum of per-output costs against `target`, halved.
    pub(crate) fn sample_loss(&self, target: &[f64]) -> f64 {
        let cost = self.cost;
        let total: f64 = self.layers.last()
            .map(|output| {
                output.neurons.iter()
                    .zip(target)
                    .map(|(n, &t)| cost.value(t, n.value))
                    .sum::<f64>()
            })
            .unwrap_or(0.0);
        total / 2.0
    }

    /// Seeds backpropagation: sets every output neuron's error and the
    /// network's current loss.
    pub(crate) fn compute_errors(&mut self, target: &[f64]) {
        let (activation, cost) = (self.activation, self.cost);
        if let Some(output) = self.layers.last_mut() {
            for (neuron, &t) in output.neurons.iter_mut().zip(target) {
                neuron.error = cost.derivative(t, neuron.value) * activation.derivative(neuron.value);
            }
        }
        self.loss = self.sample_loss(target);
    }

    /// Propagates errors from the output back to the first hidden layer,
    /// updating the weights and biases feeding each layer as it goes.
    pub(crate) fn backward(&mut self) {
        let sgd = Sgd::new(self.learning_rate);
        let activation = self.activation;
        let last = self.layers.len().saturating_sub(1);

        for i in (1..=last).rev() {
            if i < last {
                let (head, tail) = self.layers.split_at_mut(i + 1);
                head[i].pull_errors(&tail[0], activation);
            }

            let (head, tail) = self.layers.split_at_mut(i);
            let upstream = &mut head[i - 1];
            for (j, neuron) in tail[0].neurons.iter().enumerate() {
                sgd.step(upstream, j, neuron.error);
            }
        }
    }

    // ── Inference ─────────────────────────────────────────────────────────

    /// Returns the output neuron with the highest activation.
    pub fn predict(&mut self, input: &[f64]) -> Result<Prediction> {
        self.check_input(input)?;
        Ok(self.classify(input))
    }

    pub(crate) fn classify(&mut self, input: &[f64]) -> Prediction {
        self.propagate(input);
        self.layers.last()
            .and_then(|output| vector::argmax(&output.values()))
            .map(|(index, value)| Prediction { index, value })
            .unwrap_or_default()
    }

    /// Mean sample loss over a dataset. Weights are left untouched.
    pub fn dataset_loss(&mut self, inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<f64> {
        self.check_dataset(inputs, targets)?;
        if inputs.is_empty() {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for (input, target) in inputs.iter().zip(targets) {
            self.propagate(input);
            total += self.sample_loss(target);
        }
        Ok(total / inputs.len() as f64)
    }

    /// Trains with an entropy-seeded RNG and the default report interval.
    /// `batch_size == 0` samples from the whole dataset.
    pub fn fit(
        &mut self,
        inputs: &[Vec<f64>],
        targets: &[Vec<f64>],
        epochs: usize,
        batch_size: usize,
    ) -> Result<FitReport> {
        crate::train::loop_fn::fit(self, inputs, targets, &TrainConfig::new(epochs, batch_size))
    }

    // ── Persistence ───────────────────────────────────────────────────────

    /// Serializes the full network state to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::debug!("saving network to {}", path.display());
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Deserializes a network written by `save_json` and rebinds its
    /// activation and cost functions by name.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Network> {
        let path = path.as_ref();
        log::debug!("loading network from {}", path.display());
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let mut network: Network = serde_json::from_reader(reader)?;
        network.validate()?;
        network.activation = ActivationFunction::from_name(&network.activation_name);
        network.cost = LossType::from_name(&network.cost_name);
        Ok(network)
    }

    fn validate(&self) -> Result<()> {
        if self.layers.len() < 2 {
            return Err(NetError::MalformedModel(format!(
                "expected at least 2 layers, found {}",
                self.layers.len()
            )));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetError::MalformedModel(format!(
                "learning rate must be positive, found {}",
                self.learning_rate
            )));
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.size() == 0 {
                return Err(NetError::MalformedModel(format!("layer {i} has no neurons")));
            }
            layer.check_shape(i, self.layers.get(i + 1))?;
        }
        Ok(())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Network {:?} ({}/{}, learning rate {}, loss {:.6})",
            self.topology(),
            self.activation,
            self.cost,
            self.learning_rate,
            self.loss
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(layers: Vec<usize>) -> Network {
        let config = NetworkConfig::new(layers, "sigmoid", "mse", 0.5);
        Network::with_rng(&config, &mut StdRng::seed_from_u64(42)).unwrap()
    }

    /// 2-1-1 network with hand-picked parameters.
    fn tiny() -> Network {
        let mut net = seeded(vec![2, 1, 1]);
        net.layers[0].weights = Matrix::from_data(vec![vec![0.5, -0.5]]);
        net.layers[0].biases = vec![0.0];
        net.layers[1].weights = Matrix::from_data(vec![vec![1.0]]);
        net.layers[1].biases = vec![0.0];
        net
    }

    fn sigmoid(x: f64) -> f64 {
        1.0 / (1.0 + (-x).exp())
    }

    #[test]
    fn construction_satisfies_layer_invariant() {
        let net = seeded(vec![3, 8, 5, 2]);
        assert_eq!(net.topology(), vec![3, 8, 5, 2]);
        for (i, pair) in net.layers.windows(2).enumerate() {
            assert_eq!(pair[0].weights.rows(), pair[1].size(), "layer {i}");
            assert_eq!(pair[0].weights.cols(), pair[0].size(), "layer {i}");
            assert_eq!(pair[0].biases.len(), pair[1].size(), "layer {i}");
        }
        assert!(net.layers[3].weights.is_empty());
        assert!(net.validate().is_ok());
    }

    #[test]
    fn construction_rejects_invalid_config() {
        let config = NetworkConfig::new(vec![3, 2], "sigmoid", "mse", 0.0);
        assert!(matches!(Network::new(&config), Err(NetError::InvalidConfig(_))));
    }

    #[test]
    fn unknown_names_fall_back_but_are_kept() {
        let config = NetworkConfig::new(vec![2, 2], "Softsign", "Hinge", 0.1);
        let net = Network::new(&config).unwrap();
        assert_eq!(net.activation(), ActivationFunction::Sigmoid);
        assert_eq!(net.cost(), LossType::Mse);
        assert_eq!(net.activation_name(), "Softsign");
    }

    #[test]
    fn forward_copies_inputs_verbatim() {
        let mut net = tiny();
        net.forward(&[3.0, -2.0]).unwrap();
        assert_eq!(net.layers[0].values(), vec![3.0, -2.0]);
    }

    #[test]
    fn forward_matches_hand_computation() {
        let mut net = tiny();
        let out = net.forward(&[1.0, 0.0]).unwrap();
        let hidden = sigmoid(0.5);
        assert_relative_eq!(net.layers[1].neurons[0].value, hidden, epsilon = 1e-12);
        assert_relative_eq!(out[0], sigmoid(hidden), epsilon = 1e-12);
    }

    #[test]
    fn forward_is_deterministic() {
        let mut net = seeded(vec![4, 6, 3]);
        let a = net.forward(&[0.1, 0.9, 0.3, 0.5]).unwrap();
        let b = net.forward(&[0.1, 0.9, 0.3, 0.5]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn forward_rejects_wrong_input_length() {
        let mut net = seeded(vec![3, 2]);
        let err = net.forward(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, NetError::ShapeMismatch { expected: 3, actual: 2, .. }));
    }

    #[test]
    fn compute_errors_sets_output_error_and_halved_loss() {
        let mut net = tiny();
        net.propagate(&[1.0, 0.0]);
        let y = net.output()[0];
        net.compute_errors(&[1.0]);
        assert_relative_eq!(net.layers[2].neurons[0].error, (1.0 - y) * y * (1.0 - y), epsilon = 1e-12);
        assert_relative_eq!(net.loss(), (1.0 - y).powi(2) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn backward_matches_hand_computation() {
        let mut net = tiny();
        net.propagate(&[1.0, 0.0]);
        let h = net.layers[1].neurons[0].value;
        let y = net.layers[2].neurons[0].value;
        net.compute_errors(&[1.0]);
        net.backward();

        let out_err = (1.0 - y) * y * (1.0 - y);
        // Hidden error reads the output weight after it has been updated.
        let w_out = 1.0 + 0.5 * out_err * h;
        let hid_err = out_err * w_out * h * (1.0 - h);

        assert_relative_eq!(net.layers[1].weights.data[0][0], w_out, epsilon = 1e-12);
        assert_relative_eq!(net.layers[1].biases[0], 0.5 * out_err, epsilon = 1e-12);
        assert_relative_eq!(net.layers[1].neurons[0].error, hid_err, epsilon = 1e-12);
        assert_relative_eq!(net.layers[0].weights.data[0][0], 0.5 + 0.5 * hid_err, epsilon = 1e-12);
        assert_relative_eq!(net.layers[0].weights.data[0][1], -0.5, epsilon = 1e-12);
        assert_relative_eq!(net.layers[0].biases[0], 0.5 * hid_err, epsilon = 1e-12);
    }

    #[test]
    fn training_steps_reduce_sample_loss() {
        let mut net = tiny();
        net.propagate(&[1.0, 0.0]);
        let before = net.sample_loss(&[1.0]);
        for _ in 0..20 {
            net.propagate(&[1.0, 0.0]);
            net.compute_errors(&[1.0]);
            net.backward();
        }
        net.propagate(&[1.0, 0.0]);
        assert!(net.sample_loss(&[1.0]) < before);
    }

    #[test]
    fn predict_reports_index_within_output() {
        let mut net = seeded(vec![3, 8, 4]);
        let p = net.predict(&[0.2, 0.4, 0.6]).unwrap();
        assert!(p.index < 4);
        assert_relative_eq!(p.value, net.output()[p.index]);
    }

    #[test]
    fn predict_handles_all_negative_outputs() {
        let config = NetworkConfig::new(vec![1, 3], "identity", "mse", 0.1);
        let mut net = Network::with_rng(&config, &mut StdRng::seed_from_u64(3)).unwrap();
        net.layers[0].weights = Matrix::from_data(vec![vec![-3.0], vec![-1.0], vec![-2.0]]);
        net.layers[0].biases = vec![0.0; 3];
        let p = net.predict(&[1.0]).unwrap();
        assert_eq!(p, Prediction { index: 1, value: -1.0 });
    }

    #[test]
    fn dataset_loss_leaves_weights_untouched() {
        let mut net = seeded(vec![2, 3, 1]);
        let before = net.layers.clone();
        let loss = net.dataset_loss(&[vec![0.0, 1.0], vec![1.0, 0.0]], &[vec![1.0], vec![0.0]]).unwrap();
        assert!(loss > 0.0);
        assert_eq!(net.layers.len(), before.len());
        for (a, b) in net.layers.iter().zip(&before) {
            assert_eq!(a.weights, b.weights);
            assert_eq!(a.biases, b.biases);
        }
    }

    #[test]
    fn display_summarises_topology() {
        let net = seeded(vec![3, 8, 2]);
        assert!(net.to_string().starts_with("Network [3, 8, 2] (sigmoid/mse"));
    }
}
