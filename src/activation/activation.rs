use std::f64::consts::E;
use std::fmt;

/// Element-wise activation applied to every hidden and output neuron.
///
/// `derivative` takes the **already activated** value `y = f(x)`, not the
/// pre-activation input. Every variant here has a derivative that can be
/// written in terms of its own output, so neurons only need to keep `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivationFunction {
    #[default]
    Sigmoid,
    Tanh,
    ReLU,
    Identity,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Identity => x,
        }
    }

    /// Derivative evaluated at the activated value `y`.
    pub fn derivative(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => y * (1.0 - y),
            ActivationFunction::Tanh => 1.0 - y * y,
            ActivationFunction::ReLU => if y > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Identity => 1.0,
        }
    }

    /// Case-insensitive lookup; `None` for unrecognised names.
    pub fn try_from_name(name: &str) -> Option<ActivationFunction> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sigmoid" | "logistic" => Some(ActivationFunction::Sigmoid),
            "tanh" => Some(ActivationFunction::Tanh),
            "relu" => Some(ActivationFunction::ReLU),
            "identity" | "linear" => Some(ActivationFunction::Identity),
            _ => None,
        }
    }

    /// Case-insensitive lookup that falls back to `Sigmoid` for unknown names.
    pub fn from_name(name: &str) -> ActivationFunction {
        Self::try_from_name(name).unwrap_or_else(|| {
            log::warn!("unknown activation function {name:?}, falling back to sigmoid");
            ActivationFunction::default()
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Sigmoid => "sigmoid",
            ActivationFunction::Tanh => "tanh",
            ActivationFunction::ReLU => "relu",
            ActivationFunction::Identity => "identity",
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
