//! # Genesis Balances
//!
//! Seeds the ledger before any command runs.

use std::collections::HashSet;

use ns_registry::InMemoryLedger;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use shared_types::{Address, Coins};
use thiserror::Error;

/// Genesis creation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenesisError {
    #[error("Genesis account {0} is not a well-formed address")]
    InvalidAccount(Address),

    #[error("Genesis account {0} listed twice")]
    DuplicateAccount(Address),

    #[error("Genesis balance overflow for {0}")]
    Overflow(Address),
}

/// An account and the coins it holds.
///
/// Coins are written the short way: `"100token,5stake"`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub address: Address,
    #[serde_as(as = "DisplayFromStr")]
    pub coins: Coins,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenesisConfig {
    pub accounts: Vec<AccountBalance>,
}

impl GenesisConfig {
    pub fn validate(&self) -> Result<(), GenesisError> {
        let mut seen = HashSet::new();
        for account in &self.accounts {
            if !account.address.is_well_formed() {
                return Err(GenesisError::InvalidAccount(account.address.clone()));
            }
            if !seen.insert(&account.address) {
                return Err(GenesisError::DuplicateAccount(account.address.clone()));
            }
        }
        Ok(())
    }

    /// Build a ledger holding exactly the genesis balances.
    pub fn build_ledger(&self) -> Result<InMemoryLedger, GenesisError> {
        self.validate()?;
        let ledger = InMemoryLedger::new();
        for account in &self.accounts {
            ledger
                .mint(&account.address, &account.coins)
                .map_err(|_| GenesisError::Overflow(account.address.clone()))?;
        }
        Ok(ledger)
    }
}
