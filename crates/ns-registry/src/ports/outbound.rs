//! Outbound Ports (Driven Ports / SPI)
//!
//! The registry depends on exactly two collaborators: a key-value store for
//! entries and a ledger that moves funds atomically between two accounts.
//! Both are synchronous; the engine treats every call as blocking and
//! fallible. A Buy's store write runs inside the ledger's transfer scope so
//! that both commit or neither does.

use shared_types::{Address, Coins};

use crate::domain::entities::RegistryEntry;
use crate::domain::errors::{CommitError, LedgerError, StoreError};

/// Mapping from name to entry.
///
/// `put` replaces a whole entry at once, so concurrent readers observe either
/// the previous or the next entry, never a mix.
pub trait RegistryStore: Send + Sync {
    fn get(&self, name: &str) -> Result<Option<RegistryEntry>, StoreError>;

    /// Create or overwrite the entry keyed by `entry.name`.
    fn put(&self, entry: RegistryEntry) -> Result<(), StoreError>;

    /// Remove an entry. Removing an absent name is a no-op.
    fn delete(&self, name: &str) -> Result<(), StoreError>;

    fn exists(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.get(name)?.is_some())
    }

    /// Snapshot of all entries, ordered by name.
    fn entries(&self) -> Result<Vec<RegistryEntry>, StoreError>;
}

/// Atomic fund movement between accounts.
pub trait Ledger: Send + Sync {
    /// Debit `from` and credit `to` by `amount`, or do nothing and fail.
    fn transfer(&self, from: &Address, to: &Address, amount: &Coins) -> Result<(), LedgerError>;

    /// Transfer bound to a store write.
    ///
    /// `commit` runs only after the transfer is known to succeed, and the
    /// transfer becomes visible only if `commit` succeeds. No other transfer
    /// may touch `from` or `to` in between.
    fn transfer_then<F>(
        &self,
        from: &Address,
        to: &Address,
        amount: &Coins,
        commit: F,
    ) -> Result<(), CommitError>
    where
        F: FnOnce() -> Result<(), StoreError>;

    fn balance(&self, account: &Address) -> Coins;
}
