//! Ports module for the Name Registry
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::RegistryApi;
pub use outbound::{Ledger, RegistryStore};
