//! Simulation configuration.
//!
//! Every field has a default, so a partial JSON document (or none at all)
//! is a valid configuration. The Round Robin quantum is deliberately absent:
//! simulations always use [`ROUND_ROBIN_QUANTUM`](crate::scheduler::ROUND_ROBIN_QUANTUM).

use serde::{Deserialize, Serialize};

use crate::generator::{Dataset, DEFAULT_PROCESS_COUNT};

/// Settings for a full four-discipline simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Dataset family each discipline draws its processes from.
    pub dataset: Dataset,
    /// Processes per discipline (synthetic and random datasets).
    pub process_count: usize,
    /// Seed for the random dataset.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dataset: Dataset::Synthetic,
            process_count: DEFAULT_PROCESS_COUNT,
            seed: 0,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Sets the dataset family.
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = dataset;
        self
    }

    /// Sets the number of processes per discipline.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
