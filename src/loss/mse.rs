pub struct MseLoss;

impl MseLoss {
    /// Per-output squared error: (target - predicted)²
    pub fn value(target: f64, predicted: f64) -> f64 {
        (target - predicted).powi(2)
    }

    /// Per-output gradient in the cost-decreasing direction: target - predicted
    pub fn derivative(target: f64, predicted: f64) -> f64 {
        target - predicted
    }
}
