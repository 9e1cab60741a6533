//! Batch evaluation configuration.

use serde::{Deserialize, Serialize};

/// Configuration for evaluating many entities at once.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BatchConfig {
    /// Evaluate entities on the rayon thread pool. Default: true.
    pub parallel: Option<bool>,
}

impl BatchConfig {
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }
}
