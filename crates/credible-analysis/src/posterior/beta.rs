//! Conjugate update from counts and prior.

use credible_core::errors::InputError;

use super::types::PosteriorEstimate;
use crate::prior::BetaPrior;
use crate::records::{check_counts, EntityRecord, UNNAMED_ENTITY};

/// Posterior for `successes` out of `trials` under `prior`.
///
/// Requires `trials > 0` and `successes <= trials`. Pure: identical inputs
/// give bit-identical output.
pub fn posterior_estimate(
    successes: u64,
    trials: u64,
    prior: &BetaPrior,
) -> Result<PosteriorEstimate, InputError> {
    check_counts(UNNAMED_ENTITY, successes, trials)?;
    Ok(update(successes, trials, prior))
}

/// Posterior for a record; errors name the record's id.
pub fn posterior_for(
    record: &EntityRecord,
    prior: &BetaPrior,
) -> Result<PosteriorEstimate, InputError> {
    record.validate()?;
    Ok(update(record.successes, record.trials, prior))
}

fn update(successes: u64, trials: u64, prior: &BetaPrior) -> PosteriorEstimate {
    let k = successes as f64;
    let failures = (trials - successes) as f64;
    let shape1 = k + prior.shape1();
    let shape2 = failures + prior.shape2();
    PosteriorEstimate {
        shape1,
        shape2,
        point_estimate: shape1 / (shape1 + shape2),
        prior_weight: prior.pseudo_trials() / (prior.pseudo_trials() + trials as f64),
    }
}
