//! # Error Types
//!
//! Decoding errors for the shared primitives.

use thiserror::Error;

/// Errors raised while decoding an account address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The input is not valid hex.
    #[error("Invalid hex address: {0:?}")]
    InvalidHex(String),

    /// Decoded to the wrong number of bytes (zero for an empty address).
    #[error("Address must be {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}

/// Errors raised while building or parsing a coin set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoinsError {
    /// Denomination does not match `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
    #[error("Invalid denomination: {0:?}")]
    InvalidDenom(String),

    /// The same denomination appears twice.
    #[error("Duplicate denomination: {0}")]
    DuplicateDenom(String),

    /// Amount is not a base-10 unsigned integer that fits in 128 bits.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// An item is not of the form `<amount><denom>`.
    #[error("Malformed coin: {0:?}")]
    Malformed(String),
}

/// Errors raised by the canonical encoder.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
