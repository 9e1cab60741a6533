//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `credible_analysis=debug`.
pub const LOG_ENV_VAR: &str = "CREDIBLE_LOG";

/// Install a global `fmt` subscriber.
///
/// The filter comes from `CREDIBLE_LOG`, falling back to `default_directive`
/// (e.g. `"info"`). Returns `false` if a global subscriber was already set.
pub fn init_tracing(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
