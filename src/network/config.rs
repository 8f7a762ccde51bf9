use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};

/// Construction-time description of a network.
///
/// Fields:
/// - `layers`              — neuron count per layer, input first, at least two
/// - `activation_function` — activation name, matched case-insensitively
/// - `cost_function`       — cost name, matched case-insensitively
/// - `learning_rate`       — SGD step size, strictly positive
///
/// Not persisted with the trained model; the model document carries its own
/// copy of the names and learning rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NetworkConfig {
    pub layers: Vec<usize>,
    #[serde(default = "default_activation")]
    pub activation_function: String,
    #[serde(default = "default_cost")]
    pub cost_function: String,
    #[serde(default)]
    pub learning_rate: f64,
}

fn default_activation() -> String {
    "sigmoid".into()
}

fn default_cost() -> String {
    "mse".into()
}

impl NetworkConfig {
    pub fn new(
        layers: Vec<usize>,
        activation_function: impl Into<String>,
        cost_function: impl Into<String>,
        learning_rate: f64,
    ) -> Self {
        NetworkConfig {
            layers,
            activation_function: activation_function.into(),
            cost_function: cost_function.into(),
            learning_rate,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetError::InvalidConfig(format!(
                "learning rate must be set and greater than 0, got {}",
                self.learning_rate
            )));
        }
        if self.layers.len() < 2 {
            return Err(NetError::InvalidConfig(format!(
                "at least 2 layers are required, got {}",
                self.layers.len()
            )));
        }
        if let Some(i) = self.layers.iter().position(|&size| size == 0) {
            return Err(NetError::InvalidConfig(format!("layer {i} has no neurons")));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Deserializes and validates a config from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: NetworkConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
