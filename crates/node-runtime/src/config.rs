//! # Node Configuration
//!
//! Defaults, then an optional JSON file, then `NS_*` environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use ns_registry::{ClaimPayment, RegistryConfig};
use serde::{Deserialize, Serialize};
use shared_types::Coins;
use thiserror::Error;

pub const ENV_LOG_LEVEL: &str = "NS_LOG_LEVEL";
pub const ENV_CLAIM_PAYMENT: &str = "NS_CLAIM_PAYMENT";
pub const ENV_MIN_PRICE: &str = "NS_MIN_PRICE";
pub const ENV_LOCK_STRIPES: &str = "NS_LOCK_STRIPES";

/// Complete node configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub registry: RegistryConfig,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            registry: RegistryConfig::default(),
        }
    }
}

impl NodeConfig {
    /// Load from `path` (if any) and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.registry.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from `lookup`, which maps variable names to values.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        if let Some(raw) = lookup(ENV_CLAIM_PAYMENT) {
            self.registry.claim_payment = raw
                .parse::<ClaimPayment>()
                .map_err(|e| ConfigError::invalid_env(ENV_CLAIM_PAYMENT, &raw, e))?;
        }
        if let Some(raw) = lookup(ENV_MIN_PRICE) {
            self.registry.min_price = raw
                .parse::<Coins>()
                .map_err(|e| ConfigError::invalid_env(ENV_MIN_PRICE, &raw, e))?;
        }
        if let Some(raw) = lookup(ENV_LOCK_STRIPES) {
            self.registry.lock_stripes = raw
                .parse::<usize>()
                .map_err(|e| ConfigError::invalid_env(ENV_LOCK_STRIPES, &raw, e))?;
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid value {value:?} for {var}: {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid registry config: {0}")]
    Registry(#[from] ns_registry::ConfigError),
}

impl ConfigError {
    fn invalid_env(var: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::InvalidEnv {
            var,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
