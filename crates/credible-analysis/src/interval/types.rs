//! Tail probabilities and interval bounds.

use credible_core::errors::ParameterError;
use serde::{Deserialize, Serialize};

/// Lower/upper tail probabilities, `0 < lower < upper < 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TailProbabilities {
    lower: f64,
    upper: f64,
}

impl TailProbabilities {
    pub fn new(lower: f64, upper: f64) -> Result<Self, ParameterError> {
        if lower > 0.0 && lower < upper && upper < 1.0 {
            Ok(Self { lower, upper })
        } else {
            Err(ParameterError::InvalidTails { lower, upper })
        }
    }

    /// Equal-tailed split of `level`, e.g. 0.95 → (0.025, 0.975).
    pub fn symmetric(level: f64) -> Result<Self, ParameterError> {
        if !(level > 0.0 && level < 1.0) {
            return Err(ParameterError::InvalidLevel { level });
        }
        let tail = (1.0 - level) / 2.0;
        Self::new(tail, 1.0 - tail)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Probability mass between the two tails.
    pub fn level(&self) -> f64 {
        self.upper - self.lower
    }
}

impl Default for TailProbabilities {
    fn default() -> Self {
        Self {
            lower: 0.025,
            upper: 0.975,
        }
    }
}

/// A closed interval inside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalBounds {
    pub low: f64,
    pub high: f64,
}

impl IntervalBounds {
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, p: f64) -> bool {
        self.low <= p && p <= self.high
    }
}
