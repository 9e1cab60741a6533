//! Prior fitting configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the empirical-Bayes prior fit.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PriorConfig {
    /// Entities with fewer trials are excluded from the fit. Default: 500.
    pub min_trials: Option<u64>,
    /// Newton-Raphson iteration cap. Default: 100.
    pub max_iterations: Option<u32>,
    /// Relative step size at which the fit counts as converged. Default: 1e-10.
    pub tolerance: Option<f64>,
}

impl PriorConfig {
    /// Returns the effective minimum trial count, defaulting to 500.
    pub fn effective_min_trials(&self) -> u64 {
        self.min_trials.unwrap_or(500)
    }

    /// Returns the effective iteration cap, defaulting to 100.
    pub fn effective_max_iterations(&self) -> u32 {
        self.max_iterations.unwrap_or(100)
    }

    /// Returns the effective convergence tolerance, defaulting to 1e-10.
    pub fn effective_tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(1e-10)
    }
}
