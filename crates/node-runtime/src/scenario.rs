//! # Scenarios
//!
//! A scenario is a genesis plus an ordered list of commands and queries.
//! Commands run first, in order; queries then observe the final state.

use ns_registry::{
    CommandPayload, QueryResponse, RegistryEntry, RegistryQuery, SubmitCommandResponse,
};
use serde::{Deserialize, Serialize};
use shared_types::Coins;

use crate::genesis::{AccountBalance, GenesisConfig};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub genesis: GenesisConfig,
    pub commands: Vec<CommandPayload>,
    pub queries: Vec<RegistryQuery>,
}

/// Everything a replay produced, in submission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub accepted: usize,
    pub rejected: usize,
    pub responses: Vec<SubmitCommandResponse>,
    pub queries: Vec<QueryResponse>,
    /// Final registry contents, sorted by name.
    pub entries: Vec<RegistryEntry>,
    /// Final balances of genesis accounts (and the registry account, if paid).
    pub balances: Vec<AccountBalance>,
    pub total_value_locked: Coins,
}
