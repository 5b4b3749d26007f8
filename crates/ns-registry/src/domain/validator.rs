//! # Command Validator
//!
//! Stateless checks run before any store or ledger access.
//!
//! These checks are necessary but not sufficient: ownership and pricing are
//! enforced by the engine against live state.
//!
//! Check order: address, then empty fields, then bid positivity.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Coins, ADDRESS_LEN};

use super::commands::Command;
use super::errors::RegistryError;

/// Field size limits (anti-DoS).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    pub max_name_len: usize,
    pub max_value_len: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_name_len: 140,
            max_value_len: 4096,
        }
    }
}

pub fn validate_set_value(name: &str, value: &str, owner: &Address) -> Result<(), RegistryError> {
    validate_address(owner)?;
    require_non_empty("name", name)?;
    require_non_empty("value", value)
}

pub fn validate_buy(name: &str, bid: &Coins, buyer: &Address) -> Result<(), RegistryError> {
    validate_address(buyer)?;
    require_non_empty("name", name)?;
    if !bid.is_all_positive() {
        return Err(RegistryError::InsufficientFunds(format!(
            "bid {:?} must be positive in every denomination",
            bid.to_string()
        )));
    }
    Ok(())
}

pub fn validate_delete(name: &str, owner: &Address) -> Result<(), RegistryError> {
    validate_address(owner)?;
    require_non_empty("name", name)
}

fn validate_address(address: &Address) -> Result<(), RegistryError> {
    if address.is_empty() {
        return Err(RegistryError::InvalidAddress("empty address".into()));
    }
    if !address.is_well_formed() {
        return Err(RegistryError::InvalidAddress(format!(
            "{}: expected {} bytes, got {}",
            address,
            ADDRESS_LEN,
            address.as_bytes().len()
        )));
    }
    Ok(())
}

fn require_non_empty(field: &'static str, s: &str) -> Result<(), RegistryError> {
    if s.is_empty() {
        return Err(RegistryError::EmptyField { field });
    }
    Ok(())
}

fn require_within(field: &'static str, s: &str, max: usize) -> Result<(), RegistryError> {
    if s.len() > max {
        return Err(RegistryError::FieldTooLong {
            field,
            len: s.len(),
            max,
        });
    }
    Ok(())
}

/// Dispatches a [`Command`] to its validation rule and applies size limits.
#[derive(Clone, Debug, Default)]
pub struct CommandValidator {
    limits: ValidationLimits,
}

impl CommandValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    pub fn validate(&self, command: &Command) -> Result<(), RegistryError> {
        match command {
            Command::SetValue(cmd) => {
                validate_set_value(&cmd.name, &cmd.value, &cmd.owner)?;
                require_within("value", &cmd.value, self.limits.max_value_len)?;
            }
            Command::Buy(cmd) => validate_buy(&cmd.name, &cmd.bid, &cmd.buyer)?,
            Command::Delete(cmd) => validate_delete(&cmd.name, &cmd.owner)?,
        }
        require_within("name", command.name(), self.limits.max_name_len)
    }
}
