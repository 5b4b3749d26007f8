//! # Node Runtime Library
//!
//! Exposes the runtime's building blocks for the binary and for tests.
//!
//! - `config` - Node configuration (file + environment)
//! - `genesis` - Initial ledger balances
//! - `scenario` - Command/query scripts and their reports
//! - `runtime` - Wires store, ledger, service and handler together

pub mod config;
pub mod genesis;
pub mod runtime;
pub mod scenario;

pub use config::{ConfigError, NodeConfig};
pub use genesis::{AccountBalance, GenesisConfig, GenesisError};
pub use runtime::{NodeRuntime, RuntimeError};
pub use scenario::{Scenario, ScenarioReport};
