//! Prior fitting errors.

use super::error_code::{self, CredibleErrorCode};

/// Errors raised while fitting the Beta prior by maximum likelihood.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    #[error("No entities left to fit after filtering at min_trials = {min_trials}")]
    EmptyInput { min_trials: u64 },

    #[error("At least 2 ratios are required to fit a prior, got {count}")]
    InsufficientData { count: usize },

    #[error("Degenerate input: {reason}")]
    Degenerate { reason: String },

    #[error("Ratio at index {index} is {value}, expected a value strictly inside (0, 1)")]
    RatioOutOfRange { index: usize, value: f64 },

    #[error("Optimizer did not converge after {iterations} iterations (last relative step {step:e})")]
    NotConverged { iterations: u32, step: f64 },

    #[error("Non-finite value encountered during {stage}")]
    NonFinite { stage: &'static str },
}

impl CredibleErrorCode for FitError {
    fn error_code(&self) -> &'static str {
        error_code::FIT_DIVERGENCE
    }
}
