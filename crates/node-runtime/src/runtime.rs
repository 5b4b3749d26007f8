//! # Node Runtime
//!
//! Owns the registry service and its IPC handler for one process lifetime.
//!
//! ## Startup Sequence
//!
//! 1. Validate registry configuration
//! 2. Seed the ledger from genesis
//! 3. Wire store, ledger, service and handler

use std::sync::Arc;

use ns_registry::{
    ClaimPayment, InMemoryLedger, InMemoryRegistryStore, Ledger, RegistryApi, RegistryError,
    RegistryHandler, RegistryService, SubmitCommandRequest,
};
use shared_types::Address;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::NodeConfig;
use crate::genesis::{AccountBalance, GenesisConfig, GenesisError};
use crate::scenario::{Scenario, ScenarioReport};

pub type NodeService = RegistryService<InMemoryRegistryStore, InMemoryLedger>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Invalid registry config: {0}")]
    Config(#[from] ns_registry::ConfigError),

    #[error("Invalid genesis: {0}")]
    Genesis(#[from] GenesisError),

    #[error("Failed to read final state: {0}")]
    State(#[from] RegistryError),
}

pub struct NodeRuntime {
    handler: RegistryHandler<NodeService>,
    /// Accounts whose balances are reported.
    accounts: Vec<Address>,
}

impl NodeRuntime {
    pub fn new(config: &NodeConfig, genesis: &GenesisConfig) -> Result<Self, RuntimeError> {
        config.registry.validate()?;
        let ledger = genesis.build_ledger()?;

        let mut accounts: Vec<Address> =
            genesis.accounts.iter().map(|a| a.address.clone()).collect();
        let registry_account = &config.registry.registry_account;
        if config.registry.claim_payment == ClaimPayment::Registry
            && !accounts.contains(registry_account)
        {
            accounts.push(registry_account.clone());
        }

        let service = RegistryService::with_config(
            Arc::new(InMemoryRegistryStore::new()),
            Arc::new(ledger),
            config.registry.clone(),
        );

        info!(
            accounts = genesis.accounts.len(),
            claim_payment = ?config.registry.claim_payment,
            lock_stripes = config.registry.lock_stripes,
            "Name registry runtime initialized"
        );

        Ok(Self {
            handler: RegistryHandler::new(Arc::new(service)),
            accounts,
        })
    }

    pub fn handler(&self) -> &RegistryHandler<NodeService> {
        &self.handler
    }

    pub fn service(&self) -> &Arc<NodeService> {
        self.handler.api()
    }

    /// Run every command, then every query, and collect the final state.
    pub fn replay(&self, scenario: &Scenario) -> Result<ScenarioReport, RuntimeError> {
        let mut responses = Vec::with_capacity(scenario.commands.len());
        for payload in &scenario.commands {
            let response = self
                .handler
                .handle_submit(SubmitCommandRequest::new(payload.clone()));
            debug!(
                correlation_id = %response.correlation_id,
                success = response.success,
                "Scenario step complete"
            );
            responses.push(response);
        }

        let queries = scenario
            .queries
            .iter()
            .map(|q| self.handler.handle_query(q.clone()))
            .collect();

        let accepted = responses.iter().filter(|r| r.success).count();
        let rejected = responses.len() - accepted;
        info!(accepted, rejected, "Scenario replayed");

        let service = self.service();
        let entries = service
            .list_names()?
            .iter()
            .map(|name| service.get_entry(name))
            .collect::<Result<Vec<_>, _>>()?;
        let balances = self
            .accounts
            .iter()
            .map(|address| AccountBalance {
                address: address.clone(),
                coins: service.ledger().balance(address),
            })
            .collect();

        Ok(ScenarioReport {
            accepted,
            rejected,
            responses,
            queries,
            entries,
            balances,
            total_value_locked: service.total_value_locked()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_registry::{CommandPayload, QueryResponse, RegistryQuery};

    const A: &str = "0xa1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1a1";
    const B: &str = "0xb2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2";

    fn genesis() -> GenesisConfig {
        GenesisConfig {
            accounts: vec![
                AccountBalance {
                    address: A.parse().unwrap(),
                    coins: "100token".parse().unwrap(),
                },
                AccountBalance {
                    address: B.parse().unwrap(),
                    coins: "100token".parse().unwrap(),
                },
            ],
        }
    }

    fn buy(name: &str, bid: &str, buyer: &str) -> CommandPayload {
        CommandPayload::BuyName {
            name: name.into(),
            bid: bid.into(),
            buyer: buyer.into(),
        }
    }

    #[test]
    fn test_replay_claim_and_outbid() {
        let runtime = NodeRuntime::new(&NodeConfig::default(), &genesis()).unwrap();
        let scenario = Scenario {
            genesis: genesis(),
            commands: vec![
                buy("alice", "10token", A),
                buy("alice", "10token", B),
                buy("alice", "15token", B),
                CommandPayload::SetName {
                    name: "alice".into(),
                    value: "1.2.3.4".into(),
                    owner: B.into(),
                },
            ],
            queries: vec![RegistryQuery::Resolve { name: "alice".into() }],
        };

        let report = runtime.replay(&scenario).unwrap();

        assert_eq!(report.accepted, 3);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.responses[1].error_code, Some(101));
        assert_eq!(
            report.queries,
            vec![QueryResponse::Value { value: "1.2.3.4".into() }]
        );
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].owner.to_string(), B);
        assert_eq!(report.balances[0].coins.to_string(), "115token");
        assert_eq!(report.balances[1].coins.to_string(), "85token");
        assert_eq!(report.total_value_locked.to_string(), "15token");
    }

    #[test]
    fn test_registry_payment_reports_registry_account() {
        let mut config = NodeConfig::default();
        config.registry.claim_payment = ClaimPayment::Registry;
        let runtime = NodeRuntime::new(&config, &genesis()).unwrap();

        let report = runtime
            .replay(&Scenario {
                commands: vec![buy("alice", "10token", A)],
                ..Default::default()
            })
            .unwrap();

        assert_eq!(report.balances.len(), 3);
        assert_eq!(report.balances[2].address, config.registry.registry_account);
        assert_eq!(report.balances[2].coins.to_string(), "10token");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = NodeConfig::default();
        config.registry.lock_stripes = 0;
        assert!(matches!(
            NodeRuntime::new(&config, &GenesisConfig::default()),
            Err(RuntimeError::Config(_))
        ));
    }
}
