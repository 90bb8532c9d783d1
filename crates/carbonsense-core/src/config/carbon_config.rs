//! Top-level CarbonSense configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ContextConfig, ObservabilityConfig, ProviderConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CARBONSENSE_*`)
/// 2. Project config (`carbonsense.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CarbonConfig {
    pub providers: ProviderConfig,
    pub context: ContextConfig,
    pub observability: ObservabilityConfig,
}

impl CarbonConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(defaults::DEFAULT_CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `CARBONSENSE_*` overrides through `lookup`. Values that fail to
    /// parse are logged and ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{name}", defaults::ENV_PREFIX));

        if let Some(v) = var("GRID_TIMEOUT_SECS") {
            override_parsed(&mut self.providers.grid_timeout_secs, "GRID_TIMEOUT_SECS", &v);
        }
        if let Some(v) = var("ROUTING_TIMEOUT_SECS") {
            override_parsed(
                &mut self.providers.routing_timeout_secs,
                "ROUTING_TIMEOUT_SECS",
                &v,
            );
        }
        if let Some(v) = var("WEATHER_TIMEOUT_SECS") {
            override_parsed(
                &mut self.providers.weather_timeout_secs,
                "WEATHER_TIMEOUT_SECS",
                &v,
            );
        }
        if let Some(v) = var("TRAINING_GRID_INTENSITY") {
            override_parsed(
                &mut self.context.training_grid_intensity,
                "TRAINING_GRID_INTENSITY",
                &v,
            );
        }
        if let Some(v) = var("TRAINING_TRANSPORT_FACTOR") {
            override_parsed(
                &mut self.context.training_transport_factor,
                "TRAINING_TRANSPORT_FACTOR",
                &v,
            );
        }
        if let Some(v) = var("LOG_LEVEL") {
            self.observability.log_level = v;
        }
        if let Some(v) = var("LOG_JSON") {
            override_parsed(&mut self.observability.json, "LOG_JSON", &v);
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, secs) in [
            ("providers.grid_timeout_secs", self.providers.grid_timeout_secs),
            ("providers.routing_timeout_secs", self.providers.routing_timeout_secs),
            ("providers.weather_timeout_secs", self.providers.weather_timeout_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        for (field, value) in [
            (
                "context.training_grid_intensity",
                self.context.training_grid_intensity,
            ),
            (
                "context.training_transport_factor",
                self.context.training_transport_factor,
            ),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a positive number".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn override_parsed<T: std::str::FromStr>(slot: &mut T, name: &str, raw: &str) {
    match raw.trim().parse::<T>() {
        Ok(v) => *slot = v,
        Err(_) => tracing::warn!(
            variable = %format!("{}{name}", defaults::ENV_PREFIX),
            value = %raw,
            "ignoring unparseable environment override"
        ),
    }
}
