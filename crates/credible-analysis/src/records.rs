//! Per-entity success/trial counts.

use credible_core::errors::InputError;
use serde::{Deserialize, Serialize};

/// Entity label used when counts arrive without an identifier.
pub const UNNAMED_ENTITY: &str = "<unnamed>";

/// One entity's observed successes out of trials (e.g. hits out of at-bats).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Opaque key.
    pub id: String,
    pub successes: u64,
    pub trials: u64,
}

impl EntityRecord {
    pub fn new(id: impl Into<String>, successes: u64, trials: u64) -> Self {
        Self {
            id: id.into(),
            successes,
            trials,
        }
    }

    /// Raw success ratio, or `None` when there are no trials.
    pub fn ratio(&self) -> Option<f64> {
        (self.trials > 0).then(|| self.successes as f64 / self.trials as f64)
    }

    /// Check `trials > 0` and `successes <= trials`.
    pub fn validate(&self) -> Result<(), InputError> {
        check_counts(&self.id, self.successes, self.trials)
    }
}

pub(crate) fn check_counts(entity: &str, successes: u64, trials: u64) -> Result<(), InputError> {
    if trials == 0 {
        return Err(InputError::ZeroTrials {
            entity: entity.to_string(),
        });
    }
    if successes > trials {
        return Err(InputError::SuccessExceedsTrials {
            entity: entity.to_string(),
            successes,
            trials,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_requires_trials() {
        assert_eq!(EntityRecord::new("a", 0, 0).ratio(), None);
        assert_eq!(EntityRecord::new("a", 1, 4).ratio(), Some(0.25));
    }

    #[test]
    fn test_validate_rejects_bad_counts() {
        assert!(EntityRecord::new("a", 0, 1).validate().is_ok());
        assert!(EntityRecord::new("a", 5, 5).validate().is_ok());
        assert_eq!(
            EntityRecord::new("a", 0, 0).validate(),
            Err(InputError::ZeroTrials { entity: "a".to_string() })
        );
        assert!(matches!(
            EntityRecord::new("b", 6, 5).validate(),
            Err(InputError::SuccessExceedsTrials { successes: 6, trials: 5, .. })
        ));
    }
}
