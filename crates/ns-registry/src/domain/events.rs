//! Registry events
//!
//! Emitted with every successful command so that indexers can maintain
//! derived views (owner → names, sales history) without reading the store.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Coins};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A previously unclaimed name got its first owner.
    NameClaimed {
        name: String,
        owner: Address,
        price: Coins,
    },
    /// Ownership moved to a higher bidder; `price` went to `seller`.
    NameSold {
        name: String,
        seller: Address,
        buyer: Address,
        price: Coins,
    },
    ValueSet {
        name: String,
        owner: Address,
        value: String,
    },
    NameDeleted { name: String, owner: Address },
}

impl RegistryEvent {
    pub fn name(&self) -> &str {
        match self {
            Self::NameClaimed { name, .. }
            | Self::NameSold { name, .. }
            | Self::ValueSet { name, .. }
            | Self::NameDeleted { name, .. } => name,
        }
    }
}
