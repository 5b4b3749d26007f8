//! IPC Module for the Name Registry
//!
//! - Accept: `SubmitCommandRequest`, `RegistryQuery`
//! - Decode: wire strings → typed commands
//! - Respond: `SubmitCommandResponse`, `QueryResponse`

pub mod handler;
pub mod payloads;

pub use handler::RegistryHandler;
pub use payloads::*;
