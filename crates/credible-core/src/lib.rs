//! # credible-core
//!
//! Shared foundation for the credible interval engine: the error taxonomy,
//! layered TOML configuration, and tracing setup. The numerical engine
//! lives in `credible-analysis`.

pub mod config;
pub mod errors;
pub mod logging;

pub use config::CredibleConfig;
pub use errors::{CredibleErrorCode, EstimateError};
