//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CascadeConfig, HistoryShape, ObservabilityConfig};
use crate::constants::CONFIG_FILENAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`INFLUENCE_*`)
/// 3. Project config (`influence.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InfluenceConfig {
    pub cascade: CascadeConfig,
    pub observability: ObservabilityConfig,
}

/// Override arguments applied on top of every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub default_probability: Option<f64>,
    pub rng_seed: Option<u64>,
    pub history_shape: Option<HistoryShape>,
    pub estimate_trials: Option<usize>,
    pub log_level: Option<String>,
}

impl InfluenceConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &InfluenceConfig) -> Result<(), ConfigError> {
        if let Some(p) = config.cascade.default_probability {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::ValidationFailed {
                    field: "cascade.default_probability".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(trials) = config.cascade.estimate_trials {
            if trials == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "cascade.estimate_trials".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut InfluenceConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: InfluenceConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `Some` values in `other` win.
    fn merge(base: &mut InfluenceConfig, other: &InfluenceConfig) {
        if other.cascade.default_probability.is_some() {
            base.cascade.default_probability = other.cascade.default_probability;
        }
        if other.cascade.rng_seed.is_some() {
            base.cascade.rng_seed = other.cascade.rng_seed;
        }
        if other.cascade.history_shape.is_some() {
            base.cascade.history_shape = other.cascade.history_shape;
        }
        if other.cascade.estimate_trials.is_some() {
            base.cascade.estimate_trials = other.cascade.estimate_trials;
        }
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
    }

    /// Apply `INFLUENCE_*` environment variables. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut InfluenceConfig) {
        if let Ok(val) = std::env::var("INFLUENCE_DEFAULT_PROBABILITY") {
            if let Ok(v) = val.parse::<f64>() {
                config.cascade.default_probability = Some(v);
            }
        }
        if let Ok(val) = std::env::var("INFLUENCE_RNG_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.cascade.rng_seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("INFLUENCE_HISTORY_SHAPE") {
            if let Ok(v) = val.parse::<HistoryShape>() {
                config.cascade.history_shape = Some(v);
            }
        }
        if let Ok(val) = std::env::var("INFLUENCE_ESTIMATE_TRIALS") {
            if let Ok(v) = val.parse::<usize>() {
                config.cascade.estimate_trials = Some(v);
            }
        }
        if let Ok(val) = std::env::var("INFLUENCE_LOG_LEVEL") {
            config.observability.log_level = Some(val);
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut InfluenceConfig, overrides: &ConfigOverrides) {
        if overrides.default_probability.is_some() {
            config.cascade.default_probability = overrides.default_probability;
        }
        if overrides.rng_seed.is_some() {
            config.cascade.rng_seed = overrides.rng_seed;
        }
        if overrides.history_shape.is_some() {
            config.cascade.history_shape = overrides.history_shape;
        }
        if overrides.estimate_trials.is_some() {
            config.cascade.estimate_trials = overrides.estimate_trials;
        }
        if overrides.log_level.is_some() {
            config.observability.log_level = overrides.log_level.clone();
        }
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }
}
