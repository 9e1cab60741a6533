//! Top-level error aggregating every subsystem.

use super::error_code::CredibleErrorCode;
use super::{ConfigError, FitError, InputError, ParameterError};

/// Any failure the engine can report.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("Prior fit failed: {0}")]
    Fit(#[from] FitError),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Invalid parameter: {0}")]
    Parameter(#[from] ParameterError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CredibleErrorCode for EstimateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Fit(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
            Self::Parameter(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
