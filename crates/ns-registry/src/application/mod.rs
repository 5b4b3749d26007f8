//! Application layer: the registry engine and its per-name locking.

pub mod locks;
pub mod service;

pub use locks::NameLocks;
pub use service::RegistryService;
