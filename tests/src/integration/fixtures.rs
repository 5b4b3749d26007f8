//! Shared builders for integration tests and benchmarks.

use std::sync::Arc;

use ns_registry::{
    Buy, Command, Delete, InMemoryLedger, InMemoryRegistryStore, RegistryConfig, RegistryService,
    SetValue,
};
use shared_types::{Address, Coins};

pub type MemoryService = RegistryService<InMemoryRegistryStore, InMemoryLedger>;

/// Deterministic 20-byte account filled with `b`.
pub fn addr(b: u8) -> Address {
    Address::from_array([b; 20])
}

/// Parse `"10token,5stake"`; panics on malformed test input.
pub fn coins(s: &str) -> Coins {
    match s.parse() {
        Ok(coins) => coins,
        Err(e) => panic!("bad test coins {:?}: {}", s, e),
    }
}

/// Service whose ledger funds every account in `accounts` with `funds`.
pub fn funded_service(accounts: &[u8], funds: &str, config: RegistryConfig) -> MemoryService {
    let balances = accounts.iter().map(|b| (addr(*b), coins(funds)));
    RegistryService::with_config(
        Arc::new(InMemoryRegistryStore::new()),
        Arc::new(InMemoryLedger::with_balances(balances)),
        config,
    )
}

pub fn buy(name: &str, bid: &str, buyer: u8) -> Command {
    Command::Buy(Buy {
        name: name.to_string(),
        bid: coins(bid),
        buyer: addr(buyer),
    })
}

pub fn set_value(name: &str, value: &str, owner: u8) -> Command {
    Command::SetValue(SetValue {
        name: name.to_string(),
        value: value.to_string(),
        owner: addr(owner),
    })
}

pub fn delete(name: &str, owner: u8) -> Command {
    Command::Delete(Delete {
        name: name.to_string(),
        owner: addr(owner),
    })
}
