pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;
pub mod metrics;

// Convenience re-exports
pub use error::{NetError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::{dense::Layer, neuron::Neuron};
pub use loss::loss_type::LossType;
pub use network::{config::NetworkConfig, network::{Network, Prediction}};
pub use optim::sgd::Sgd;
pub use train::{fit, train_step, EpochStats, FitReport, TrainConfig};
pub use metrics::confusion::ConfusionMatrix;
