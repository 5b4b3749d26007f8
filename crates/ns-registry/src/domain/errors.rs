//! Error types for the Name Registry
//!
//! Every failure is a rejected command. Nothing here is fatal to the process.

use shared_types::{Address, Coins};
use thiserror::Error;

/// All errors a registry command can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required string field was empty.
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    /// A string field exceeded its configured limit.
    #[error("{field} too long: {len} > {max} bytes")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// Owner/buyer identifier was empty or malformed.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The ledger refused an account during a transfer.
    #[error("Ledger rejected account: {0}")]
    InvalidAccount(String),

    /// Bid was not strictly positive, or the ledger reported a shortfall.
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    /// Bid did not exceed the current price of a claimed name.
    #[error("Bid {bid} does not exceed current price {price}")]
    BidTooLow { bid: Coins, price: Coins },

    /// Caller is not the current owner, or the name is unclaimed.
    #[error("Unauthorized: caller does not own {name:?}")]
    Unauthorized { name: String },

    /// Name has no entry. Only surfaced by read queries.
    #[error("Name not found: {name:?}")]
    NotFound { name: String },

    /// An amount computation overflowed 128 bits.
    #[error("Amount overflow")]
    AmountOverflow,

    /// Command could not be encoded canonically.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Registry store backend failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl RegistryError {
    /// Numeric code reported on the IPC surface.
    ///
    /// Kinds shared with the SDK root codespace reuse its codes (internal 1,
    /// unauthorized 4, insufficient funds 5, unknown request 6, invalid
    /// address 7, not found 38). Registry-specific kinds start at 101.
    pub fn code(&self) -> u32 {
        match self {
            Self::Store(_) | Self::Encoding(_) => 1,
            Self::Unauthorized { .. } => 4,
            Self::InsufficientFunds(_) => 5,
            Self::EmptyField { .. } | Self::FieldTooLong { .. } => 6,
            Self::InvalidAddress(_) | Self::InvalidAccount(_) => 7,
            Self::NotFound { .. } => 38,
            Self::BidTooLow { .. } => 101,
            Self::AmountOverflow => 102,
        }
    }

    /// True when the failure was detected before touching any state.
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Self::EmptyField { .. } | Self::FieldTooLong { .. } | Self::InvalidAddress(_)
        )
    }
}

/// Registry store backend failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Backend failure: {0}")]
    Backend(String),
}

/// Ledger transfer failure. Any error means the transfer did not happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Account {account} holds {available}, needs {required}")]
    InsufficientFunds {
        account: Address,
        required: Coins,
        available: Coins,
    },

    #[error("Invalid account: {0:?}")]
    InvalidAccount(Address),

    #[error("Balance overflow for account {0}")]
    Overflow(Address),
}

impl From<LedgerError> for RegistryError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds { .. } => Self::InsufficientFunds(err.to_string()),
            LedgerError::InvalidAccount(account) => Self::InvalidAccount(account.to_string()),
            LedgerError::Overflow(_) => Self::AmountOverflow,
        }
    }
}

/// Failure of a transfer bound to a store write.
///
/// Either way, neither the balances nor the store changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<CommitError> for RegistryError {
    fn from(err: CommitError) -> Self {
        match err {
            CommitError::Ledger(e) => e.into(),
            CommitError::Store(e) => e.into(),
        }
    }
}
