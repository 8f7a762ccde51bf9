pub struct BceLoss;

const EPS: f64 = 1e-12;

impl BceLoss {
    /// Per-output BCE: -(t·log(p+ε) + (1-t)·log(1-p+ε))
    pub fn value(target: f64, predicted: f64) -> f64 {
        -(target * (predicted + EPS).ln() + (1.0 - target) * (1.0 - predicted + EPS).ln())
    }

    /// Per-output gradient: (t - p) / ((p + ε) · (1 - p + ε))
    pub fn derivative(target: f64, predicted: f64) -> f64 {
        (target - predicted) / ((predicted + EPS) * (1.0 - predicted + EPS))
    }
}
