use std::fmt;

use crate::loss::{bce::BceLoss, mae::MaeLoss, mse::MseLoss};

/// Selects the cost function used to seed backpropagation.
///
/// `derivative` always points in the cost-decreasing direction
/// (`target - predicted` for MSE), so the weight update adds it.
///
/// - `Mse`                — squared error; the default.
/// - `Mae`                — absolute error.
/// - `BinaryCrossEntropy` — log loss; pair with a Sigmoid output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LossType {
    #[default]
    Mse,
    Mae,
    BinaryCrossEntropy,
}

impl LossType {
    pub fn value(&self, target: f64, predicted: f64) -> f64 {
        match self {
            LossType::Mse => MseLoss::value(target, predicted),
            LossType::Mae => MaeLoss::value(target, predicted),
            LossType::BinaryCrossEntropy => BceLoss::value(target, predicted),
        }
    }

    pub fn derivative(&self, target: f64, predicted: f64) -> f64 {
        match self {
            LossType::Mse => MseLoss::derivative(target, predicted),
            LossType::Mae => MaeLoss::derivative(target, predicted),
            LossType::BinaryCrossEntropy => BceLoss::derivative(target, predicted),
        }
    }

    /// Case-insensitive lookup; `None` for unrecognised names.
    pub fn try_from_name(name: &str) -> Option<LossType> {
        match name.trim().to_ascii_lowercase().as_str() {
            "mse" | "mean-squared-error" => Some(LossType::Mse),
            "mae" | "mean-absolute-error" => Some(LossType::Mae),
            "bce" | "binary-cross-entropy" => Some(LossType::BinaryCrossEntropy),
            _ => None,
        }
    }

    /// Case-insensitive lookup that falls back to `Mse` for unknown names.
    pub fn from_name(name: &str) -> LossType {
        Self::try_from_name(name).unwrap_or_else(|| {
            log::warn!("unknown cost function {name:?}, falling back to mse");
            LossType::default()
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            LossType::Mse => "mse",
            LossType::Mae => "mae",
            LossType::BinaryCrossEntropy => "bce",
        }
    }
}

impl fmt::Display for LossType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mse_value_and_derivative() {
        assert_relative_eq!(LossType::Mse.value(1.0, 0.25), 0.5625);
        assert_relative_eq!(LossType::Mse.derivative(1.0, 0.25), 0.75);
        assert_relative_eq!(LossType::Mse.derivative(0.0, 0.25), -0.25);
    }

    #[test]
    fn mae_derivative_is_sign() {
        assert_eq!(LossType::Mae.derivative(1.0, 0.2), 1.0);
        assert_eq!(LossType::Mae.derivative(0.0, 0.2), -1.0);
        assert_eq!(LossType::Mae.derivative(0.5, 0.5), 0.0);
    }

    #[test]
    fn bce_gradient_pushes_toward_target() {
        assert!(LossType::BinaryCrossEntropy.derivative(1.0, 0.3) > 0.0);
        assert!(LossType::BinaryCrossEntropy.derivative(0.0, 0.3) < 0.0);
        assert!(LossType::BinaryCrossEntropy.value(1.0, 0.9) < LossType::BinaryCrossEntropy.value(1.0, 0.1));
    }

    #[test]
    fn lookup_is_case_insensitive_with_fallback() {
        assert_eq!(LossType::try_from_name("MSE"), Some(LossType::Mse));
        assert_eq!(LossType::try_from_name("Binary-Cross-Entropy"), Some(LossType::BinaryCrossEntropy));
        assert_eq!(LossType::try_from_name("hinge"), None);
        assert_eq!(LossType::from_name("hinge"), LossType::Mse);
    }
}
