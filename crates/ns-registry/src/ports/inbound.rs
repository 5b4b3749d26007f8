//! Inbound Ports (Driving Ports / API)

use shared_types::{Address, Coins};

use crate::domain::commands::Command;
use crate::domain::entities::RegistryEntry;
use crate::domain::errors::RegistryError;
use crate::domain::value_objects::ExecutionReceipt;

/// Primary Name Registry API.
pub trait RegistryApi: Send + Sync {
    /// Validate and apply one command atomically.
    ///
    /// Returns the post-transition snapshot, or a typed failure with no
    /// partial effect on the store or the ledger.
    fn execute(&self, command: Command) -> Result<ExecutionReceipt, RegistryError>;

    // === Query Surface (read-only) ===

    /// Current entry, or `NotFound`.
    fn get_entry(&self, name: &str) -> Result<RegistryEntry, RegistryError>;

    /// Value bound to a claimed name.
    fn resolve(&self, name: &str) -> Result<String, RegistryError> {
        self.get_entry(name).map(|entry| entry.value)
    }

    /// All claimed names, sorted.
    fn list_names(&self) -> Result<Vec<String>, RegistryError>;

    /// Names currently owned by `owner`, sorted. Derived view.
    fn names_owned_by(&self, owner: &Address) -> Result<Vec<String>, RegistryError>;

    /// Sum of the current prices of all claimed names.
    fn total_value_locked(&self) -> Result<Coins, RegistryError>;
}
