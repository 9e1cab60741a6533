//! Configuration system for the credible interval engine.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod batch_config;
pub mod credible_config;
pub mod interval_config;
pub mod prior_config;

pub use batch_config::BatchConfig;
pub use credible_config::{ConfigOverrides, CredibleConfig};
pub use interval_config::IntervalConfig;
pub use prior_config::PriorConfig;
