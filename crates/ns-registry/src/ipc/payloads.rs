//! IPC Payloads for the Name Registry
//!
//! Wire forms carry addresses as hex strings and amounts as coin strings
//! (`"10token,5stake"`). Decoding follows the engine's check order: the
//! signer address first, then the bid. Empty-field and limit checks stay with
//! the engine.

use serde::{Deserialize, Serialize};
use shared_types::{Address, AddressError, Coins, CoinsError, ADDRESS_LEN};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::commands::{Buy, Command, Delete, SetValue};
use crate::domain::entities::RegistryEntry;
use crate::domain::events::RegistryEvent;

// ============================================================
// INCOMING REQUESTS
// ============================================================

/// A command as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandPayload {
    SetName {
        name: String,
        value: String,
        owner: String,
    },
    BuyName {
        name: String,
        bid: String,
        buyer: String,
    },
    DeleteName {
        name: String,
        owner: String,
    },
}

impl CommandPayload {
    pub fn into_command(self) -> Result<Command, PayloadError> {
        Ok(match self {
            Self::SetName { name, value, owner } => Command::SetValue(SetValue {
                name,
                value,
                owner: decode_address("owner", &owner)?,
            }),
            Self::BuyName { name, bid, buyer } => {
                let buyer = decode_address("buyer", &buyer)?;
                Command::Buy(Buy {
                    name,
                    bid: decode_bid(&bid)?,
                    buyer,
                })
            }
            Self::DeleteName { name, owner } => Command::Delete(Delete {
                name,
                owner: decode_address("owner", &owner)?,
            }),
        })
    }
}

fn decode_address(field: &'static str, raw: &str) -> Result<Address, PayloadError> {
    let address =
        Address::from_hex(raw).map_err(|source| PayloadError::InvalidAddress { field, source })?;
    if !address.is_well_formed() {
        return Err(PayloadError::InvalidAddress {
            field,
            source: AddressError::WrongLength {
                expected: ADDRESS_LEN,
                actual: address.as_bytes().len(),
            },
        });
    }
    Ok(address)
}

/// Signed amounts are a bid-level failure, not a syntax error.
fn decode_bid(raw: &str) -> Result<Coins, PayloadError> {
    if raw.split(',').any(|item| item.trim_start().starts_with('-')) {
        return Err(PayloadError::NonPositiveBid(raw.to_string()));
    }
    Ok(raw.parse::<Coins>()?)
}

/// Request to apply one command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitCommandRequest {
    /// Correlation ID for response tracking
    pub correlation_id: Uuid,
    pub command: CommandPayload,
}

impl SubmitCommandRequest {
    pub fn new(command: CommandPayload) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            command,
        }
    }
}

/// Read-only lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum RegistryQuery {
    Whois { name: String },
    Resolve { name: String },
    Names,
    NamesOwnedBy { owner: String },
    TotalValueLocked,
}

// ============================================================
// OUTGOING RESPONSES
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitCommandResponse {
    /// Correlation ID from request
    pub correlation_id: Uuid,
    pub success: bool,
    /// Hex SHA-256 of the canonical command bytes
    pub command_id: Option<String>,
    /// Post-transition entry (absent after a delete or a failure)
    pub entry: Option<RegistryEntry>,
    pub events: Vec<RegistryEvent>,
    pub error: Option<String>,
    pub error_code: Option<u32>,
}

impl SubmitCommandResponse {
    pub fn failure(correlation_id: Uuid, error: String, code: u32) -> Self {
        Self {
            correlation_id,
            success: false,
            command_id: None,
            entry: None,
            events: vec![],
            error: Some(error),
            error_code: Some(code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum QueryResponse {
    Entry { entry: RegistryEntry },
    Value { value: String },
    Names { names: Vec<String> },
    Amount { amount: Coins },
    Error { error: String, code: u32 },
}

// ============================================================
// DECODING ERRORS
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("Invalid {field} address: {source}")]
    InvalidAddress {
        field: &'static str,
        source: AddressError,
    },

    #[error("Invalid coins: {0}")]
    InvalidCoins(#[from] CoinsError),

    #[error("Insufficient funds: bid {0:?} must be positive in every denomination")]
    NonPositiveBid(String),
}

impl PayloadError {
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidAddress { .. } => 7,
            Self::InvalidCoins(_) => 10,
            Self::NonPositiveBid(_) => 5,
        }
    }
}
