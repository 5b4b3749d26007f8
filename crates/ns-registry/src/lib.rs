//! # Name Registry Subsystem
//!
//! Human-readable names bound to values, owned by accounts and transferred
//! by competitive bidding. Every accepted command moves the registry and the
//! ledger together or not at all.
//!
//! ## Architecture
//!
//! - **Domain**: Commands, entries, validation rules, events
//! - **Ports**: Inbound (RegistryApi) and Outbound (RegistryStore, Ledger)
//! - **Adapters**: In-memory store and ledger
//! - **Application**: Service orchestration and per-name locking
//! - **IPC**: Wire payloads and handler
//!
//! ## State Machine (per name)
//!
//! ```text
//! Unclaimed --Buy(bid > min_price)--> Claimed(buyer, bid)
//! Claimed   --Buy(bid > price)------> Claimed(buyer, bid)   (bid paid to previous owner)
//! Claimed   --SetValue(owner)-------> Claimed(value updated)
//! Claimed   --Delete(owner)---------> Unclaimed
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ipc;
pub mod ports;

pub use adapters::{InMemoryLedger, InMemoryRegistryStore};
pub use application::service::RegistryService;
pub use config::{ClaimPayment, ConfigError, RegistryConfig};
pub use domain::*;
pub use ipc::{
    CommandPayload, PayloadError, QueryResponse, RegistryHandler, RegistryQuery,
    SubmitCommandRequest, SubmitCommandResponse,
};
pub use ports::inbound::RegistryApi;
pub use ports::outbound::{Ledger, RegistryStore};
