pub struct MaeLoss;

impl MaeLoss {
    /// Per-output absolute error: |target - predicted|
    pub fn value(target: f64, predicted: f64) -> f64 {
        (target - predicted).abs()
    }

    /// Per-output subgradient: sign(target - predicted), 0 when equal
    pub fn derivative(target: f64, predicted: f64) -> f64 {
        let diff = target - predicted;
        if diff > 0.0 { 1.0 } else if diff < 0.0 { -1.0 } else { 0.0 }
    }
}
