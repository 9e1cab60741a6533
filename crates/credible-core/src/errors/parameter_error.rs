//! Distribution parameter errors.

use super::error_code::{self, CredibleErrorCode};

/// Errors raised when a Beta shape or a tail probability is out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("Shape parameter {name} must be finite and > 0, got {value}")]
    NonPositiveShape { name: &'static str, value: f64 },

    #[error("Tail probabilities must satisfy 0 < lower < upper < 1, got ({lower}, {upper})")]
    InvalidTails { lower: f64, upper: f64 },

    #[error("Credibility level must lie strictly inside (0, 1), got {level}")]
    InvalidLevel { level: f64 },

    #[error("Beta({shape1}, {shape2}) could not be constructed: {message}")]
    Distribution {
        shape1: f64,
        shape2: f64,
        message: String,
    },
}

impl CredibleErrorCode for ParameterError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_PARAMETER
    }
}
