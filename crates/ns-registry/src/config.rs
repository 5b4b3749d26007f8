//! Configuration for the Name Registry

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared_types::{Address, Coins};
use thiserror::Error;

use crate::domain::entities::{module_address, MODULE_NAME};
use crate::domain::validator::ValidationLimits;

/// Where the bid goes when an unclaimed name is claimed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimPayment {
    /// No transfer; the bid only sets the starting price.
    #[default]
    Free,
    /// The bid is transferred from the buyer to `registry_account`.
    Registry,
}

impl FromStr for ClaimPayment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "registry" => Ok(Self::Registry),
            other => Err(ConfigError::UnknownClaimPayment(other.to_string())),
        }
    }
}

/// Registry configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// A claim bid must exceed this. Empty means any positive bid.
    pub min_price: Coins,
    pub claim_payment: ClaimPayment,
    /// Account credited under `ClaimPayment::Registry`.
    pub registry_account: Address,
    /// Number of stripes in the per-name lock table.
    pub lock_stripes: usize,
    pub limits: ValidationLimits,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            min_price: Coins::empty(),
            claim_payment: ClaimPayment::Free,
            registry_account: module_address(MODULE_NAME),
            lock_stripes: 64,
            limits: ValidationLimits::default(),
        }
    }
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lock_stripes == 0 {
            return Err(ConfigError::NoLockStripes);
        }
        if self.claim_payment == ClaimPayment::Registry && !self.registry_account.is_well_formed() {
            return Err(ConfigError::InvalidRegistryAccount(self.registry_account.to_string()));
        }
        if !self.min_price.is_empty() && !self.min_price.is_all_positive() {
            return Err(ConfigError::InvalidMinPrice(self.min_price.to_string()));
        }
        if self.limits.max_name_len == 0 || self.limits.max_value_len == 0 {
            return Err(ConfigError::ZeroLimit);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("lock_stripes must be at least 1")]
    NoLockStripes,

    #[error("registry_account {0:?} is not a well-formed address")]
    InvalidRegistryAccount(String),

    #[error("min_price {0:?} must be positive in every denomination")]
    InvalidMinPrice(String),

    #[error("field limits must be non-zero")]
    ZeroLimit,

    #[error("unknown claim payment policy {0:?} (expected free or registry)")]
    UnknownClaimPayment(String),
}
