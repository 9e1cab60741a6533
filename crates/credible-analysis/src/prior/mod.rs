//! Empirical-Bayes prior: a Beta distribution fit by maximum likelihood to
//! the success ratios of well-observed entities.

pub mod mle;
pub mod moments;
pub mod special;
pub mod types;

pub use mle::{fit_beta, fit_prior};
pub use moments::method_of_moments;
pub use types::{BetaPrior, FitDiagnostics, FitOptions, FittedPrior};
