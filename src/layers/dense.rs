use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    activation::activation::ActivationFunction,
    error::{NetError, Result},
    layers::neuron::Neuron,
    math::{matrix::Matrix, vector},
};

/// One stage of the network.
///
/// The weights and biases stored here belong to the connections **leaving**
/// this layer: `weights[i][j]` joins this layer's neuron `j` to the next
/// layer's neuron `i`. The output layer therefore has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub weights: Matrix,
    #[serde(default, deserialize_with = "null_as_default")]
    pub biases: Vec<f64>,
    pub neurons: Vec<Neuron>,
}

/// Treats a JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Layer {
    /// Builds a layer of `size` neurons. When `next_size` is given, the
    /// outgoing weights and biases are drawn uniformly from [0, 1).
    pub fn new<R: Rng + ?Sized>(size: usize, next_size: Option<usize>, rng: &mut R) -> Layer {
        let (weights, biases) = match next_size {
            Some(next) => {
                let weights = Matrix::random(next, size, &mut *rng);
                let biases = (0..next).map(|_| rng.gen::<f64>()).collect();
                (weights, biases)
            }
            None => (Matrix::default(), Vec::new()),
        };

        Layer {
            weights,
            biases,
            neurons: vec![Neuron::default(); size],
        }
    }

    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    pub fn values(&self) -> Vec<f64> {
        self.neurons.iter().map(|n| n.value).collect()
    }

    /// Overwrites neuron values verbatim, with no activation applied.
    pub(crate) fn load_inputs(&mut self, input: &[f64]) {
        for (neuron, &x) in self.neurons.iter_mut().zip(input) {
            neuron.value = x;
        }
    }

    /// Computes `activation(W · self + b)` and writes it into `next`.
    pub(crate) fn feed_into(&self, next: &mut Layer, activation: ActivationFunction) {
        let z = vector::add(&self.weights.dot_by(&self.neurons, |n| n.value), &self.biases);
        for (neuron, z) in next.neurons.iter_mut().zip(z) {
            neuron.value = activation.function(z);
        }
    }

    /// Hidden-layer error: `Σₖ next[k].error · W[k][j]`, scaled by the
    /// activation derivative at this neuron's value.
    pub(crate) fn pull_errors(&mut self, next: &Layer, activation: ActivationFunction) {
        for j in 0..self.neurons.len() {
            let sum: f64 = next.neurons.iter()
                .zip(&self.weights.data)
                .map(|(downstream, row)| downstream.error * row[j])
                .sum();
            let neuron = &mut self.neurons[j];
            neuron.error = sum * activation.derivative(neuron.value);
        }
    }

    /// Checks the topology invariant against the following layer, if any.
    pub(crate) fn check_shape(&self, index: usize, next: Option<&Layer>) -> Result<()> {
        match next {
            Some(next) => {
                let rows = next.size();
                if self.weights.rows() != rows || self.biases.len() != rows {
                    return Err(NetError::MalformedModel(format!(
                        "layer {index}: expected {rows} weight rows and biases, found {} and {}",
                        self.weights.rows(),
                        self.biases.len()
                    )));
                }
                if !self.weights.is_rectangular(self.size()) {
                    return Err(NetError::MalformedModel(format!(
                        "layer {index}: every weight row must have {} columns",
                        self.size()
                    )));
                }
            }
            None => {
                if !self.weights.is_empty() || !self.biases.is_empty() {
                    return Err(NetError::MalformedModel(format!(
                        "output layer {index} must not carry weights or biases"
                    )));
                }
            }
        }
        Ok(())
    }
}
