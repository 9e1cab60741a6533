//! # credible-analysis
//!
//! Empirical-Bayes estimation for binomial proportions. A Beta prior is fit
//! once from entities with enough trials, then every entity gets a
//! Beta-Binomial posterior, a shrunken point estimate, and a credible interval.
//!
//! ```text
//! records ──► prior::fit_prior ──► BetaPrior (immutable)
//!                                     │
//! record ──► posterior::posterior_estimate ──► interval::credible_interval
//! ```

pub mod empirical;
pub mod interval;
pub mod posterior;
pub mod prior;
pub mod records;

pub use empirical::{BatchReport, EmpiricalBayes, EntityEstimate, EntityFailure};
pub use interval::{credible_interval, IntervalBounds, TailProbabilities};
pub use posterior::{posterior_estimate, PosteriorEstimate};
pub use prior::{fit_beta, fit_prior, BetaPrior, FitDiagnostics, FitOptions, FittedPrior};
pub use records::EntityRecord;
