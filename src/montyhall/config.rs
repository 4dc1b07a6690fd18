//! Configuration options for the simulator.

use serde::{Deserialize, Serialize};

/// Configuration for a Monte Carlo run.
///
/// # Example
/// ```
/// use monty_hall::montyhall::SimulationConfig;
///
/// let config = SimulationConfig::new(500).with_seed(42);
/// assert_eq!(config.trials, 500);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of trials to play.
    pub trials: u64,

    /// Random seed for reproducibility.
    ///
    /// If `None`, the simulator seeds itself from OS entropy.
    pub seed: Option<u64>,

    /// Draw a progress bar on stderr while trials run.
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: 10_000,
            seed: None,
            show_progress: false,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration for `trials` trials.
    pub fn new(trials: u64) -> Self {
        Self {
            trials,
            ..Default::default()
        }
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: enable or disable the progress bar.
    pub fn with_progress(mut self, enable: bool) -> Self {
        self.show_progress = enable;
        self
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidJson(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidJson(e.to_string()))
    }
}

/// Errors that can occur when loading a simulation configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The JSON could not be parsed into a configuration.
    InvalidJson(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidJson(msg) => write!(f, "Invalid simulation config JSON: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
