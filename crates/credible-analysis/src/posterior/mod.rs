//! Beta-Binomial posteriors. Prior: Beta(α₀, β₀).
//! Posterior after k successes in n trials: Beta(α₀ + k, β₀ + n − k).

pub mod beta;
pub mod types;

pub use beta::{posterior_estimate, posterior_for};
pub use types::PosteriorEstimate;
