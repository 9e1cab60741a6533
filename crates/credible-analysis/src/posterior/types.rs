//! Posterior estimate type.

use credible_core::errors::ParameterError;
use serde::{Deserialize, Serialize};

use crate::interval::{credible_interval, IntervalBounds, TailProbabilities};

/// Posterior Beta parameters for one entity plus its point estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PosteriorEstimate {
    /// successes + prior shape1.
    pub shape1: f64,
    /// (trials − successes) + prior shape2.
    pub shape2: f64,
    /// Posterior mean: shape1 / (shape1 + shape2).
    pub point_estimate: f64,
    /// Share of the posterior mean owed to the prior:
    /// (α₀ + β₀) / (α₀ + β₀ + n). Tends to 0 as trials grow.
    pub prior_weight: f64,
}

impl PosteriorEstimate {
    pub fn variance(&self) -> f64 {
        let sum = self.shape1 + self.shape2;
        (self.shape1 * self.shape2) / (sum * sum * (sum + 1.0))
    }

    /// Credible interval of this posterior at the given tails.
    pub fn interval(&self, tails: TailProbabilities) -> Result<IntervalBounds, ParameterError> {
        credible_interval(self.shape1, self.shape2, tails.lower(), tails.upper())
    }
}
