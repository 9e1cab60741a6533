//! Credible interval configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the interval reported per entity.
///
/// `lower_tail`/`upper_tail` take precedence over `level` when both are set.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IntervalConfig {
    /// Credibility level split symmetrically across both tails. Default: 0.95.
    pub level: Option<f64>,
    /// Explicit lower tail probability.
    pub lower_tail: Option<f64>,
    /// Explicit upper tail probability.
    pub upper_tail: Option<f64>,
}

impl IntervalConfig {
    /// Returns the effective credibility level, defaulting to 0.95.
    pub fn effective_level(&self) -> f64 {
        self.level.unwrap_or(0.95)
    }

    /// Returns the `(lower, upper)` tail probabilities to evaluate.
    pub fn effective_tails(&self) -> (f64, f64) {
        match (self.lower_tail, self.upper_tail) {
            (Some(lower), Some(upper)) => (lower, upper),
            _ => {
                let tail = (1.0 - self.effective_level()) / 2.0;
                (tail, 1.0 - tail)
            }
        }
    }
}
