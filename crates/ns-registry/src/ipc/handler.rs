//! IPC Handler for the Name Registry
//!
//! Decodes wire payloads, delegates to the registry service and encodes the
//! outcome. Every failure becomes a response with `success == false`; the
//! handler never panics on client input.

use std::sync::Arc;
use std::time::Instant;

use shared_types::Address;
use tracing::{error, info, warn};

use crate::domain::errors::RegistryError;
use crate::ipc::payloads::{
    QueryResponse, RegistryQuery, SubmitCommandRequest, SubmitCommandResponse,
};
use crate::ports::inbound::RegistryApi;

pub struct RegistryHandler<A> {
    api: Arc<A>,
}

impl<A: RegistryApi> RegistryHandler<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    pub fn handle_submit(&self, request: SubmitCommandRequest) -> SubmitCommandResponse {
        let start_time = Instant::now();
        let correlation_id = request.correlation_id;

        let command = match request.command.into_command() {
            Ok(command) => command,
            Err(e) => {
                warn!("[ns-registry] Rejected undecodable command: {}", e);
                return SubmitCommandResponse::failure(correlation_id, e.to_string(), e.code());
            }
        };

        let kind = command.type_tag();
        match self.api.execute(command) {
            Ok(receipt) => {
                info!(
                    "[ns-registry] ✓ {} {} in {}µs",
                    kind,
                    receipt.command_id.short(),
                    start_time.elapsed().as_micros()
                );
                SubmitCommandResponse {
                    correlation_id,
                    success: true,
                    command_id: Some(receipt.command_id.to_hex()),
                    entry: receipt.outcome.entry().cloned(),
                    events: receipt.events,
                    error: None,
                    error_code: None,
                }
            }
            Err(e) => {
                if matches!(e, RegistryError::Store(_)) {
                    error!("[ns-registry] ❌ {} failed: {}", kind, e);
                } else {
                    warn!("[ns-registry] {} rejected: {}", kind, e);
                }
                SubmitCommandResponse::failure(correlation_id, e.to_string(), e.code())
            }
        }
    }

    pub fn handle_query(&self, query: RegistryQuery) -> QueryResponse {
        let result = match query {
            RegistryQuery::Whois { name } => self
                .api
                .get_entry(&name)
                .map(|entry| QueryResponse::Entry { entry }),
            RegistryQuery::Resolve { name } => self
                .api
                .resolve(&name)
                .map(|value| QueryResponse::Value { value }),
            RegistryQuery::Names => self
                .api
                .list_names()
                .map(|names| QueryResponse::Names { names }),
            RegistryQuery::NamesOwnedBy { owner } => match Address::from_hex(&owner) {
                Ok(owner) => self
                    .api
                    .names_owned_by(&owner)
                    .map(|names| QueryResponse::Names { names }),
                Err(e) => Err(RegistryError::InvalidAddress(e.to_string())),
            },
            RegistryQuery::TotalValueLocked => self
                .api
                .total_value_locked()
                .map(|amount| QueryResponse::Amount { amount }),
        };

        result.unwrap_or_else(|e| QueryResponse::Error {
            error: e.to_string(),
            code: e.code(),
        })
    }
}
