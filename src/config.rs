//! Configuration management for polargrid.
//!
//! Layered configuration with the following precedence:
//! 1. Environment variables (highest priority)
//! 2. JSON config file
//! 3. Default values (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PolarGridError, Result};
use crate::interpolation::{get_locator, OffMeshPolicy};

/// Environment variable overriding `search.locator`
pub const ENV_LOCATOR: &str = "POLARGRID_LOCATOR";
/// Environment variable overriding `search.off_mesh`
pub const ENV_OFF_MESH: &str = "POLARGRID_OFF_MESH";
/// Environment variable overriding `log_level`
pub const ENV_LOG_LEVEL: &str = "POLARGRID_LOG_LEVEL";

/// Element search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Element locator name (nearest_center, containment)
    #[serde(default = "default_locator")]
    pub locator: String,

    /// What to do with points no element claims
    #[serde(default)]
    pub off_mesh: OffMeshPolicy,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Search configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Config::default(),
        };
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Override fields from `POLARGRID_*` environment variables
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locator) = lookup(ENV_LOCATOR) {
            self.search.locator = locator;
        }
        if let Some(policy) = lookup(ENV_OFF_MESH) {
            self.search.off_mesh = policy.parse().map_err(|_| PolarGridError::Config {
                message: format!(
                    "Invalid {}: {}. Must be one of: first_element, reject",
                    ENV_OFF_MESH, policy
                ),
            })?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(PolarGridError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        get_locator(&self.search.locator, 1.0, 1.0).map_err(|_| PolarGridError::Config {
            message: format!(
                "Invalid locator: {}. Must be one of: nearest_center, containment",
                self.search.locator
            ),
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            locator: default_locator(),
            off_mesh: OffMeshPolicy::default(),
        }
    }
}

// Default value functions for serde
fn default_locator() -> String {
    "nearest_center".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
