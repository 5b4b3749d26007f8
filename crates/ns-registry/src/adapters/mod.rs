//! # Adapters Layer (Hexagonal Architecture)
//!
//! In-memory implementations of the outbound ports, used by the node runtime
//! and by tests.

mod memory_ledger;
mod memory_store;

pub use memory_ledger::InMemoryLedger;
pub use memory_store::InMemoryRegistryStore;
