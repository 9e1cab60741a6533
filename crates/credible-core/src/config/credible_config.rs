//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BatchConfig, IntervalConfig, PriorConfig};
use crate::errors::ConfigError;

/// Name of the project-level config file looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "credible.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`CREDIBLE_*`)
/// 3. Project config (`credible.toml` in project root)
/// 4. User config (`~/.credible/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CredibleConfig {
    pub prior: PriorConfig,
    pub interval: IntervalConfig,
    pub batch: BatchConfig,
}

/// Caller-supplied overrides, applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub min_trials: Option<u64>,
    pub level: Option<f64>,
    pub parallel: Option<bool>,
}

impl CredibleConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only a malformed file is fatal.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(path = %user_config_path.display(), error = %e, "skipping user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "configuration resolved");

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CredibleConfig) -> Result<(), ConfigError> {
        if let Some(iterations) = config.prior.max_iterations {
            if iterations == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "prior.max_iterations".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(tolerance) = config.prior.tolerance {
            if !(tolerance.is_finite() && tolerance > 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "prior.tolerance".to_string(),
                    message: "must be a finite value greater than 0".to_string(),
                });
            }
        }
        if let Some(level) = config.interval.level {
            if !(level > 0.0 && level < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "interval.level".to_string(),
                    message: "must lie strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        match (config.interval.lower_tail, config.interval.upper_tail) {
            (None, None) => {}
            (Some(lower), Some(upper)) => {
                if !(lower > 0.0 && lower < upper && upper < 1.0) {
                    return Err(ConfigError::ValidationFailed {
                        field: "interval.lower_tail".to_string(),
                        message: "tails must satisfy 0 < lower_tail < upper_tail < 1".to_string(),
                    });
                }
            }
            _ => {
                return Err(ConfigError::ValidationFailed {
                    field: "interval.upper_tail".to_string(),
                    message: "lower_tail and upper_tail must be set together".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.credible/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".credible").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut CredibleConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CredibleConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut CredibleConfig, other: &CredibleConfig) {
        if other.prior.min_trials.is_some() {
            base.prior.min_trials = other.prior.min_trials;
        }
        if other.prior.max_iterations.is_some() {
            base.prior.max_iterations = other.prior.max_iterations;
        }
        if other.prior.tolerance.is_some() {
            base.prior.tolerance = other.prior.tolerance;
        }

        if other.interval.level.is_some() {
            base.interval.level = other.interval.level;
        }
        // Tails travel as a pair so a file cannot leave half of an old pair behind.
        // A layer that sets only a level drops the pair from the layers below it.
        if other.interval.lower_tail.is_some() || other.interval.upper_tail.is_some() {
            base.interval.lower_tail = other.interval.lower_tail;
            base.interval.upper_tail = other.interval.upper_tail;
        } else if other.interval.level.is_some() {
            base.interval.lower_tail = None;
            base.interval.upper_tail = None;
        }

        if other.batch.parallel.is_some() {
            base.batch.parallel = other.batch.parallel;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CREDIBLE_PRIOR_MIN_TRIALS`, `CREDIBLE_INTERVAL_LEVEL`, etc.
    fn apply_env_overrides(config: &mut CredibleConfig) {
        if let Some(v) = env_parse::<u64>("CREDIBLE_PRIOR_MIN_TRIALS") {
            config.prior.min_trials = Some(v);
        }
        if let Some(v) = env_parse::<u32>("CREDIBLE_PRIOR_MAX_ITERATIONS") {
            config.prior.max_iterations = Some(v);
        }
        if let Some(v) = env_parse::<f64>("CREDIBLE_PRIOR_TOLERANCE") {
            config.prior.tolerance = Some(v);
        }
        if let Some(v) = env_parse::<f64>("CREDIBLE_INTERVAL_LEVEL") {
            config.interval.level = Some(v);
            config.interval.lower_tail = None;
            config.interval.upper_tail = None;
        }
        if let Some(v) = env_parse::<bool>("CREDIBLE_BATCH_PARALLEL") {
            config.batch.parallel = Some(v);
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut CredibleConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.min_trials {
            config.prior.min_trials = Some(v);
        }
        if let Some(v) = overrides.level {
            // An explicit level replaces any configured tail pair.
            config.interval.level = Some(v);
            config.interval.lower_tail = None;
            config.interval.upper_tail = None;
        }
        if let Some(v) = overrides.parallel {
            config.batch.parallel = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse an environment variable, ignoring it when unset or malformed.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
