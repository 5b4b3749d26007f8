//! # Domain Entities for the Name Registry
//!
//! ## Invariants
//!
//! - At most one `RegistryEntry` per name (the name is the primary key)
//! - `owner` is never empty for an existing entry
//! - An entry exists iff the name was claimed and not deleted since

use serde::{Deserialize, Serialize};
use shared_types::{sha256, Address, Coins, ADDRESS_LEN};

/// Route and codec namespace of the registry.
pub const MODULE_NAME: &str = "nameservice";

/// State bound to a claimed name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    /// Empty right after a claim until the owner sets it.
    pub value: String,
    pub owner: Address,
    /// Amount a Buy must exceed to take the name over.
    pub price: Coins,
}

impl RegistryEntry {
    /// Entry for a freshly claimed name.
    pub fn claimed(name: impl Into<String>, owner: Address, price: Coins) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            owner,
            price,
        }
    }

    pub fn is_owned_by(&self, address: &Address) -> bool {
        &self.owner == address
    }
}

/// Per-name state machine position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameState {
    Unclaimed,
    Claimed(RegistryEntry),
}

impl From<Option<RegistryEntry>> for NameState {
    fn from(lookup: Option<RegistryEntry>) -> Self {
        match lookup {
            Some(entry) => Self::Claimed(entry),
            None => Self::Unclaimed,
        }
    }
}

impl NameState {
    pub fn is_claimed(&self) -> bool {
        matches!(self, Self::Claimed(_))
    }
}

/// Deterministic account owned by a module, derived from its name.
pub fn module_address(module: &str) -> Address {
    let digest = sha256(module.as_bytes());
    Address::new(&digest[..ADDRESS_LEN])
}
