//! # Core Domain Entities
//!
//! Account identifiers and multi-denomination amounts shared by every crate
//! in the workspace.
//!
//! ## Clusters
//!
//! - **Accounts**: `Address`
//! - **Funds**: `Coin`, `Coins`
//!
//! ## Type Decisions
//!
//! - `amount: u128` - covers every practical token supply without pulling in
//!   big-integer arithmetic. Amounts travel as decimal strings on the wire so
//!   that JSON consumers never lose precision.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{serde_as, DisplayFromStr};

use crate::errors::{AddressError, CoinsError};

// =============================================================================
// CLUSTER A: ACCOUNTS
// =============================================================================

/// Length in bytes of a well-formed account address.
pub const ADDRESS_LEN: usize = 20;

/// An account identifier.
///
/// Stored as raw bytes so that empty and wrong-length identifiers can be
/// represented and rejected by validation rather than by the decoder.
/// Rendered as `0x`-prefixed lowercase hex.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(Vec<u8>);

impl Address {
    /// Wrap raw bytes without any validation.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Build a well-formed address from a fixed-size array.
    pub fn from_array(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes.to_vec())
    }

    /// The empty address.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Parse from hex, with or without the `0x` prefix.
    ///
    /// An empty string yields the empty address.
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        hex::decode(digits)
            .map(Self)
            .map_err(|_| AddressError::InvalidHex(s.to_string()))
    }

    /// True when the address carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the address has exactly `ADDRESS_LEN` bytes.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == ADDRESS_LEN
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        format!("0x{}", hex::encode(&self.0))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// CLUSTER B: FUNDS
// =============================================================================

/// A single-denomination amount.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde_as(as = "DisplayFromStr")]
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// A denomination is a letter followed by 2..=127 characters from
/// `[a-zA-Z0-9/:._-]`.
pub fn is_valid_denom(denom: &str) -> bool {
    let len = denom.len();
    if !(3..=128).contains(&len) {
        return false;
    }
    let mut chars = denom.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'))
}

/// A multi-denomination amount.
///
/// ## Invariants
///
/// - Sorted by denomination
/// - No duplicate denominations
/// - Every denomination passes [`is_valid_denom`]
///
/// Zero amounts are preserved by [`Coins::new`] so that validation can reject
/// them explicitly; arithmetic results drop them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// Build a coin set, sorting by denomination.
    pub fn new(mut coins: Vec<Coin>) -> Result<Self, CoinsError> {
        for coin in &coins {
            if !is_valid_denom(&coin.denom) {
                return Err(CoinsError::InvalidDenom(coin.denom.clone()));
            }
        }
        coins.sort_by(|a, b| a.denom.cmp(&b.denom));
        for pair in coins.windows(2) {
            if pair[0].denom == pair[1].denom {
                return Err(CoinsError::DuplicateDenom(pair[0].denom.clone()));
            }
        }
        Ok(Self(coins))
    }

    /// Shorthand for a single-denomination set.
    pub fn single(denom: &str, amount: u128) -> Result<Self, CoinsError> {
        Self::new(vec![Coin::new(denom, amount)])
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    /// Amount held in `denom`, zero when absent.
    pub fn amount_of(&self, denom: &str) -> u128 {
        self.0
            .binary_search_by(|c| c.denom.as_str().cmp(denom))
            .map(|idx| self.0[idx].amount)
            .unwrap_or(0)
    }

    /// Non-empty and strictly positive in every denomination.
    pub fn is_all_positive(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|c| c.amount > 0)
    }

    /// Strictly greater than `other` in every denomination `other` holds.
    ///
    /// Denominations only present in `self` do not take part in the
    /// comparison. An empty `other` is dominated by any non-empty `self`.
    ///
    /// This is a partial order: `5atom,1token` and `1atom,5token` do not
    /// dominate each other. No exchange rate between denominations is assumed.
    pub fn dominates(&self, other: &Coins) -> bool {
        !self.0.is_empty()
            && other
                .iter()
                .all(|c| self.amount_of(&c.denom) > c.amount)
    }

    /// At least as large as `other` in every denomination `other` holds.
    pub fn covers(&self, other: &Coins) -> bool {
        other.iter().all(|c| self.amount_of(&c.denom) >= c.amount)
    }

    pub fn checked_add(&self, other: &Coins) -> Option<Coins> {
        let mut merged = self.0.clone();
        for coin in other.iter() {
            match merged.binary_search_by(|c| c.denom.cmp(&coin.denom)) {
                Ok(idx) => merged[idx].amount = merged[idx].amount.checked_add(coin.amount)?,
                Err(idx) => merged.insert(idx, coin.clone()),
            }
        }
        merged.retain(|c| c.amount > 0);
        Some(Coins(merged))
    }

    /// `None` when any denomination would go negative.
    pub fn checked_sub(&self, other: &Coins) -> Option<Coins> {
        let mut remaining = self.0.clone();
        for coin in other.iter() {
            match remaining.binary_search_by(|c| c.denom.cmp(&coin.denom)) {
                Ok(idx) => remaining[idx].amount = remaining[idx].amount.checked_sub(coin.amount)?,
                Err(_) if coin.amount == 0 => {}
                Err(_) => return None,
            }
        }
        remaining.retain(|c| c.amount > 0);
        Some(Coins(remaining))
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(Coin::to_string).collect();
        f.write_str(&parts.join(","))
    }
}

/// Parses `"10token,5stake"`. Whitespace around items is ignored; an empty
/// string yields an empty set.
impl FromStr for Coins {
    type Err = CoinsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::empty());
        }

        let mut coins = Vec::new();
        for item in s.split(',') {
            let item = item.trim();
            let split = item
                .find(|c: char| !c.is_ascii_digit())
                .ok_or_else(|| CoinsError::Malformed(item.to_string()))?;
            let (amount, denom) = item.split_at(split);
            if amount.is_empty() {
                return Err(CoinsError::Malformed(item.to_string()));
            }
            let amount = amount
                .parse::<u128>()
                .map_err(|_| CoinsError::InvalidAmount(amount.to_string()))?;
            coins.push(Coin::new(denom.trim(), amount));
        }
        Self::new(coins)
    }
}

impl<'de> Deserialize<'de> for Coins {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let coins = Vec::<Coin>::deserialize(deserializer)?;
        Self::new(coins).map_err(serde::de::Error::custom)
    }
}
