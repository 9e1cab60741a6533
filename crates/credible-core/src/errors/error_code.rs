//! Stable error codes surfaced to callers.

/// Prior fitting diverged or had nothing usable to fit.
pub const FIT_DIVERGENCE: &str = "FIT_DIVERGENCE";
/// Entity counts violate `trials > 0` or `successes <= trials`.
pub const INVALID_INPUT: &str = "INVALID_INPUT";
/// A shape parameter or tail probability is out of range.
pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
/// Configuration could not be read, parsed, or validated.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Every error type in the engine maps to one stable code.
pub trait CredibleErrorCode {
    fn error_code(&self) -> &'static str;
}
