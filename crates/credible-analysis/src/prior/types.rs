//! Prior parameter and fit result types.

use credible_core::config::PriorConfig;
use credible_core::errors::ParameterError;
use serde::Serialize;

/// Beta(shape1, shape2) prior. Both shapes are finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BetaPrior {
    shape1: f64,
    shape2: f64,
}

impl BetaPrior {
    pub fn new(shape1: f64, shape2: f64) -> Result<Self, ParameterError> {
        check_shape("shape1", shape1)?;
        check_shape("shape2", shape2)?;
        Ok(Self { shape1, shape2 })
    }

    /// Jeffreys prior Beta(0.5, 0.5).
    pub fn jeffreys() -> Self {
        Self {
            shape1: 0.5,
            shape2: 0.5,
        }
    }

    /// Uniform prior Beta(1, 1).
    pub fn uniform() -> Self {
        Self {
            shape1: 1.0,
            shape2: 1.0,
        }
    }

    pub fn shape1(&self) -> f64 {
        self.shape1
    }

    pub fn shape2(&self) -> f64 {
        self.shape2
    }

    /// Prior mean: shape1 / (shape1 + shape2).
    pub fn mean(&self) -> f64 {
        self.shape1 / (self.shape1 + self.shape2)
    }

    pub fn variance(&self) -> f64 {
        let sum = self.shape1 + self.shape2;
        (self.shape1 * self.shape2) / (sum * sum * (sum + 1.0))
    }

    /// Number of trials the prior is "worth" (shape1 + shape2).
    pub fn pseudo_trials(&self) -> f64 {
        self.shape1 + self.shape2
    }
}

pub(crate) fn check_shape(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParameterError::NonPositiveShape { name, value })
    }
}

/// Newton-Raphson settings for the maximum-likelihood fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    pub max_iterations: u32,
    /// Converged once the largest relative change of a shape drops below this.
    pub tolerance: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self::from(&PriorConfig::default())
    }
}

impl From<&PriorConfig> for FitOptions {
    fn from(config: &PriorConfig) -> Self {
        Self {
            max_iterations: config.effective_max_iterations(),
            tolerance: config.effective_tolerance(),
        }
    }
}

/// How the optimizer got to the fitted prior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitDiagnostics {
    /// Ratios that entered the fit.
    pub sample_size: usize,
    pub iterations: u32,
    /// Total log-likelihood at the fitted shapes.
    pub log_likelihood: f64,
    /// Method-of-moments shapes the optimizer started from.
    pub start: (f64, f64),
}

/// Fitted prior together with its diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FittedPrior {
    pub prior: BetaPrior,
    pub diagnostics: FitDiagnostics,
}
