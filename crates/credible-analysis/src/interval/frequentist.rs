//! Frequentist binomial intervals, for comparison with credible intervals.

use credible_core::errors::EstimateError;

use super::credible::beta_quantile;
use super::types::{IntervalBounds, TailProbabilities};
use crate::records::{check_counts, UNNAMED_ENTITY};

/// Exact (Clopper-Pearson) binomial confidence interval.
///
/// low = Beta(k, n − k + 1) quantile at the lower tail (0 when k = 0),
/// high = Beta(k + 1, n − k) quantile at the upper tail (1 when k = n).
pub fn clopper_pearson_interval(
    successes: u64,
    trials: u64,
    tails: TailProbabilities,
) -> Result<IntervalBounds, EstimateError> {
    check_counts(UNNAMED_ENTITY, successes, trials)?;
    let k = successes as f64;
    let n = trials as f64;

    let low = if successes == 0 {
        0.0
    } else {
        beta_quantile(k, n - k + 1.0, tails.lower())?
    };
    let high = if successes == trials {
        1.0
    } else {
        beta_quantile(k + 1.0, n - k, tails.upper())?
    };
    Ok(IntervalBounds { low, high })
}

/// Jeffreys binomial interval: quantiles of Beta(k + ½, n − k + ½), with
/// low forced to 0 when k = 0 and high forced to 1 when k = n.
pub fn jeffreys_interval(
    successes: u64,
    trials: u64,
    tails: TailProbabilities,
) -> Result<IntervalBounds, EstimateError> {
    check_counts(UNNAMED_ENTITY, successes, trials)?;
    let a = successes as f64 + 0.5;
    let b = (trials - successes) as f64 + 0.5;

    let low = if successes == 0 {
        0.0
    } else {
        beta_quantile(a, b, tails.lower())?
    };
    let high = if successes == trials {
        1.0
    } else {
        beta_quantile(a, b, tails.upper())?
    };
    Ok(IntervalBounds { low, high })
}
