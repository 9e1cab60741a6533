//! Error handling for the credible interval engine.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod estimate_error;
pub mod fit_error;
pub mod input_error;
pub mod parameter_error;

pub use config_error::ConfigError;
pub use error_code::CredibleErrorCode;
pub use estimate_error::EstimateError;
pub use fit_error::FitError;
pub use input_error::InputError;
pub use parameter_error::ParameterError;
