//! Entity count validation errors.

use super::error_code::{self, CredibleErrorCode};

/// Errors raised when an entity's success/trial counts are unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Entity {entity} has zero trials")]
    ZeroTrials { entity: String },

    #[error("Entity {entity} has {successes} successes in only {trials} trials")]
    SuccessExceedsTrials {
        entity: String,
        successes: u64,
        trials: u64,
    },
}

impl InputError {
    /// Identifier of the offending entity.
    pub fn entity(&self) -> &str {
        match self {
            Self::ZeroTrials { entity } | Self::SuccessExceedsTrials { entity, .. } => entity,
        }
    }
}

impl CredibleErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
