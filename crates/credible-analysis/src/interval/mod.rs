//! Interval estimates: Bayesian credible intervals from Beta quantiles, and
//! the frequentist intervals they are usually compared against.

pub mod credible;
pub mod frequentist;
pub mod types;

pub use credible::credible_interval;
pub use frequentist::{clopper_pearson_interval, jeffreys_interval};
pub use types::{IntervalBounds, TailProbabilities};
