//! Value objects for the Name Registry
//!
//! Immutable results handed back to callers.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared_types::Hash;

use super::entities::RegistryEntry;
use super::events::RegistryEvent;

/// SHA-256 of a command's canonical bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId(pub Hash);

impl CommandId {
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// First four bytes, for log lines.
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommandId({})", self.short())
    }
}

impl Serialize for CommandId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for CommandId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        let hash: Hash = bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("command id must be 32 bytes"))?;
        Ok(Self(hash))
    }
}

/// Post-transition view of the name a command touched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Entry(RegistryEntry),
    Deleted { name: String },
}

impl Outcome {
    pub fn entry(&self) -> Option<&RegistryEntry> {
        match self {
            Self::Entry(entry) => Some(entry),
            Self::Deleted { .. } => None,
        }
    }
}

/// Result of a successfully applied command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReceipt {
    pub command_id: CommandId,
    pub outcome: Outcome,
    pub events: Vec<RegistryEvent>,
}
