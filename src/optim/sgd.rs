use crate::layers::dense::Layer;

/// Plain online gradient descent: every sample's update is applied at once.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Adjusts the connections from `layer` into downstream neuron `target`.
    ///
    /// `error` already points in the cost-decreasing direction, so it is added:
    /// `Δb = lr · error`, `Δw[target][m] = Δb · layer.neurons[m].value`.
    pub fn step(&self, layer: &mut Layer, target: usize, error: f64) {
        let delta_bias = self.learning_rate * error;
        let row = &mut layer.weights.data[target];
        for (w, neuron) in row.iter_mut().zip(&layer.neurons) {
            *w += delta_bias * neuron.value;
        }
        layer.biases[target] += delta_bias;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::neuron::Neuron;
    use crate::math::matrix::Matrix;
    use approx::assert_relative_eq;

    #[test]
    fn step_scales_by_input_activation() {
        let mut layer = Layer {
            weights: Matrix::from_data(vec![vec![0.0, 0.0], vec![1.0, 1.0]]),
            biases: vec![0.0, 0.0],
            neurons: vec![Neuron { value: 0.5, error: 0.0 }, Neuron { value: 2.0, error: 0.0 }],
        };

        Sgd::new(0.1).step(&mut layer, 1, 0.5);

        assert_eq!(layer.weights.data[0], vec![0.0, 0.0]);
        assert_relative_eq!(layer.weights.data[1][0], 1.025);
        assert_relative_eq!(layer.weights.data[1][1], 1.1);
        assert_relative_eq!(layer.biases[1], 0.05);
        assert_eq!(layer.biases[0], 0.0);
    }
}
