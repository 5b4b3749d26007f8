//! # Canonical Encoding
//!
//! Deterministic byte encoding for anything that gets hashed or signed.
//!
//! The value is first lowered to a `serde_json::Value`, whose object map is
//! ordered by key, and then written without whitespace. Two values that are
//! equal therefore always produce identical bytes regardless of struct field
//! declaration order.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::CodecError;

/// A 32-byte SHA-256 digest.
pub type Hash = [u8; 32];

/// Sorted-key, whitespace-free JSON encoding of `value`.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    let lowered = serde_json::to_value(value)?;
    Ok(serde_json::to_vec(&lowered)?)
}

/// SHA-256 of `bytes`.
pub fn sha256(bytes: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}
