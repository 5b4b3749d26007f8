//! # Shared Types Crate
//!
//! Primitives shared by every crate in the workspace: account addresses,
//! multi-denomination amounts, and the canonical encoder used to derive
//! signing bytes and command identifiers.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Cross-crate types are defined here.
//! - **Validation at the edges**: Decoders accept anything structurally
//!   parseable; semantic rules (empty, wrong length, non-positive) are enforced
//!   by the consuming subsystem so that it can report a precise error.
//! - **Deterministic encoding**: Hashes and signing bytes are computed over
//!   [`codec::canonical_json`] only.

pub mod codec;
pub mod entities;
pub mod errors;

pub use codec::{canonical_json, sha256, Hash};
pub use entities::*;
pub use errors::*;
