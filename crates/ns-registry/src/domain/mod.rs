//! Domain module for the Name Registry
//!
//! Contains entities, commands, events, errors, validation and invariants.

pub mod commands;
pub mod entities;
pub mod errors;
pub mod events;
pub mod invariants;
pub mod validator;
pub mod value_objects;

pub use commands::*;
pub use entities::*;
pub use errors::*;
pub use events::*;
pub use validator::*;
pub use value_objects::*;
