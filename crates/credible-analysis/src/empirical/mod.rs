//! Empirical-Bayes orchestration: fit the prior once, then estimate every
//! entity independently against it.

pub mod batch;
pub mod model;

pub use batch::{BatchReport, EntityFailure};
pub use model::{EmpiricalBayes, EntityEstimate};
