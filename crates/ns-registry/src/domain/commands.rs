//! # Registry Commands
//!
//! The closed set of state-changing commands. Each command is an immutable
//! value built once per submission.
//!
//! ## Canonical Form
//!
//! ```text
//! {"type":"nameservice/BuyName","value":{"bid":[...],"buyer":"0x..","name":"alice"}}
//! ```
//!
//! Keys are sorted by [`shared_types::canonical_json`]; the SHA-256 of these
//! bytes is the command's [`CommandId`].

use std::fmt;

use serde::{Deserialize, Serialize};
use shared_types::{canonical_json, sha256, Address, Coins};

use super::entities::MODULE_NAME;
use super::errors::RegistryError;
use super::value_objects::CommandId;

/// Bind a new value to a name the sender owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetValue {
    pub name: String,
    pub value: String,
    pub owner: Address,
}

/// Claim an unowned name or outbid its current owner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buy {
    pub name: String,
    pub bid: Coins,
    pub buyer: Address,
}

/// Release a name the sender owns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delete {
    pub name: String,
    pub owner: Address,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Command {
    #[serde(rename = "nameservice/SetName")]
    SetValue(SetValue),
    #[serde(rename = "nameservice/BuyName")]
    Buy(Buy),
    #[serde(rename = "nameservice/DeleteName")]
    Delete(Delete),
}

impl Command {
    /// The name this command operates on.
    pub fn name(&self) -> &str {
        match self {
            Self::SetValue(cmd) => &cmd.name,
            Self::Buy(cmd) => &cmd.name,
            Self::Delete(cmd) => &cmd.name,
        }
    }

    pub fn route(&self) -> &'static str {
        MODULE_NAME
    }

    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::SetValue(_) => "set_name",
            Self::Buy(_) => "buy_name",
            Self::Delete(_) => "delete_name",
        }
    }

    /// The account whose signature authorizes this command.
    pub fn signer(&self) -> &Address {
        match self {
            Self::SetValue(cmd) => &cmd.owner,
            Self::Buy(cmd) => &cmd.buyer,
            Self::Delete(cmd) => &cmd.owner,
        }
    }

    pub fn signers(&self) -> Vec<Address> {
        vec![self.signer().clone()]
    }

    /// Bytes a signer commits to.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, RegistryError> {
        canonical_json(self).map_err(|e| RegistryError::Encoding(e.to_string()))
    }

    pub fn id(&self) -> Result<CommandId, RegistryError> {
        Ok(CommandId(sha256(&self.canonical_bytes()?)))
    }
}

impl From<SetValue> for Command {
    fn from(cmd: SetValue) -> Self {
        Self::SetValue(cmd)
    }
}

impl From<Buy> for Command {
    fn from(cmd: Buy) -> Self {
        Self::Buy(cmd)
    }
}

impl From<Delete> for Command {
    fn from(cmd: Delete) -> Self {
        Self::Delete(cmd)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetValue(cmd) => write!(
                f,
                "SetName(name: {}, owner: {}, value: {})",
                cmd.name, cmd.owner, cmd.value
            ),
            Self::Buy(cmd) => write!(
                f,
                "BuyName(name: {}, bid: {}, buyer: {})",
                cmd.name, cmd.bid, cmd.buyer
            ),
            Self::Delete(cmd) => {
                write!(f, "DeleteName(name: {}, owner: {})", cmd.name, cmd.owner)
            }
        }
    }
}
