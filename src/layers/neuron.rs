use serde::{Deserialize, Serialize};

/// Scalar unit of a layer. Both fields are overwritten in place on every
/// forward/backward pass; `error` is meaningless before the first training step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Neuron {
    pub value: f64,
    #[serde(default)]
    pub error: f64,
}
