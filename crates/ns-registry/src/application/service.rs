//! Name Registry Service
//!
//! Main service implementing RegistryApi.
//!
//! Pipeline for every command:
//! 1. Stateless validation (no store or ledger access)
//! 2. Take the per-name lock
//! 3. Read live state and check ownership / price
//! 4. Move funds through the ledger (Buy only)
//! 5. Write the store inside the ledger's transfer scope, so the transfer
//!    lands only if the write does

use std::sync::Arc;

use shared_types::{Address, Coins};
use tracing::{debug, error, info, warn};

use crate::application::locks::NameLocks;
use crate::config::{ClaimPayment, RegistryConfig};
use crate::domain::commands::{Buy, Command, Delete, SetValue};
use crate::domain::entities::{NameState, RegistryEntry};
use crate::domain::errors::{CommitError, RegistryError, StoreError};
use crate::domain::events::RegistryEvent;
use crate::domain::invariants::{invariant_authorized, invariant_owner_present, invariant_price_increase};
use crate::domain::validator::CommandValidator;
use crate::domain::value_objects::{ExecutionReceipt, Outcome};
use crate::ports::inbound::RegistryApi;
use crate::ports::outbound::{Ledger, RegistryStore};

type Transition = (Outcome, Vec<RegistryEvent>);

/// Name Registry Service
///
/// The only writer of the registry store.
pub struct RegistryService<S, L> {
    store: Arc<S>,
    ledger: Arc<L>,
    config: RegistryConfig,
    validator: CommandValidator,
    locks: NameLocks,
}

impl<S: RegistryStore, L: Ledger> RegistryService<S, L> {
    /// Create a new service with default config
    pub fn new(store: Arc<S>, ledger: Arc<L>) -> Self {
        Self::with_config(store, ledger, RegistryConfig::default())
    }

    /// Create a new service with custom config
    pub fn with_config(store: Arc<S>, ledger: Arc<L>, config: RegistryConfig) -> Self {
        Self {
            store,
            ledger,
            validator: CommandValidator::new(config.limits.clone()),
            locks: NameLocks::new(config.lock_stripes),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn ledger(&self) -> &Arc<L> {
        &self.ledger
    }

    fn apply(&self, command: &Command) -> Result<Transition, RegistryError> {
        match command {
            Command::SetValue(cmd) => self.apply_set_value(cmd),
            Command::Buy(cmd) => self.apply_buy(cmd),
            Command::Delete(cmd) => self.apply_delete(cmd),
        }
    }

    fn apply_set_value(&self, cmd: &SetValue) -> Result<Transition, RegistryError> {
        let current = self.owned_entry(&cmd.name, &cmd.owner)?;
        debug_assert!(invariant_authorized(&current, &cmd.owner));

        let next = RegistryEntry {
            value: cmd.value.clone(),
            ..current
        };
        self.store.put(next.clone())?;

        let event = RegistryEvent::ValueSet {
            name: next.name.clone(),
            owner: next.owner.clone(),
            value: next.value.clone(),
        };
        Ok((Outcome::Entry(next), vec![event]))
    }

    fn apply_buy(&self, cmd: &Buy) -> Result<Transition, RegistryError> {
        match NameState::from(self.store.get(&cmd.name)?) {
            NameState::Unclaimed => self.claim(cmd),
            NameState::Claimed(current) => self.outbid(cmd, current),
        }
    }

    fn claim(&self, cmd: &Buy) -> Result<Transition, RegistryError> {
        let min_price = &self.config.min_price;
        if !min_price.is_empty() && !cmd.bid.dominates(min_price) {
            return Err(RegistryError::BidTooLow {
                bid: cmd.bid.clone(),
                price: min_price.clone(),
            });
        }

        let entry = RegistryEntry::claimed(cmd.name.clone(), cmd.buyer.clone(), cmd.bid.clone());
        debug_assert!(invariant_price_increase(None, &entry));

        let payee = match self.config.claim_payment {
            ClaimPayment::Free => None,
            ClaimPayment::Registry => Some(&self.config.registry_account),
        };
        self.commit_with_transfer(&cmd.buyer, payee, &cmd.bid, || self.store.put(entry.clone()))?;

        let event = RegistryEvent::NameClaimed {
            name: entry.name.clone(),
            owner: entry.owner.clone(),
            price: entry.price.clone(),
        };
        Ok((Outcome::Entry(entry), vec![event]))
    }

    fn outbid(&self, cmd: &Buy, current: RegistryEntry) -> Result<Transition, RegistryError> {
        if !cmd.bid.dominates(&current.price) {
            return Err(RegistryError::BidTooLow {
                bid: cmd.bid.clone(),
                price: current.price,
            });
        }

        let next = RegistryEntry {
            owner: cmd.buyer.clone(),
            price: cmd.bid.clone(),
            ..current.clone()
        };
        debug_assert!(invariant_price_increase(Some(&current), &next));

        // The full bid goes to the previous owner
        self.commit_with_transfer(&cmd.buyer, Some(&current.owner), &cmd.bid, || {
            self.store.put(next.clone())
        })?;

        let event = RegistryEvent::NameSold {
            name: next.name.clone(),
            seller: current.owner,
            buyer: next.owner.clone(),
            price: next.price.clone(),
        };
        Ok((Outcome::Entry(next), vec![event]))
    }

    fn apply_delete(&self, cmd: &Delete) -> Result<Transition, RegistryError> {
        let current = self.owned_entry(&cmd.name, &cmd.owner)?;
        debug_assert!(invariant_authorized(&current, &cmd.owner));

        self.store.delete(&cmd.name)?;

        let event = RegistryEvent::NameDeleted {
            name: current.name.clone(),
            owner: current.owner,
        };
        Ok((Outcome::Deleted { name: current.name }, vec![event]))
    }

    /// Entry for `name` if `owner` holds it.
    ///
    /// Absence and foreign ownership both surface as `Unauthorized`, so a
    /// rejected caller learns nothing about whether the name exists.
    fn owned_entry(&self, name: &str, owner: &Address) -> Result<RegistryEntry, RegistryError> {
        match self.store.get(name)? {
            Some(entry) if entry.is_owned_by(owner) => Ok(entry),
            Some(_) => {
                debug!(name, "Rejecting mutation from non-owner");
                Err(RegistryError::Unauthorized { name: name.to_string() })
            }
            None => {
                debug!(name, "Rejecting mutation of unclaimed name");
                Err(RegistryError::Unauthorized { name: name.to_string() })
            }
        }
    }

    /// Run `write` inside the ledger's transfer scope.
    ///
    /// With no payee, `write` runs alone. Otherwise the transfer and the
    /// write commit together or not at all.
    fn commit_with_transfer<F>(
        &self,
        from: &Address,
        to: Option<&Address>,
        amount: &Coins,
        write: F,
    ) -> Result<(), RegistryError>
    where
        F: FnOnce() -> Result<(), StoreError>,
    {
        let Some(to) = to else {
            return write().map_err(RegistryError::from);
        };

        self.ledger
            .transfer_then(from, to, amount, write)
            .map_err(|err| {
                if let CommitError::Store(store_err) = &err {
                    error!(
                        from = %from,
                        to = %to,
                        amount = %amount,
                        error = %store_err,
                        "Store write failed, transfer not applied"
                    );
                }
                RegistryError::from(err)
            })
    }
}

impl<S: RegistryStore, L: Ledger> RegistryApi for RegistryService<S, L> {
    fn execute(&self, command: Command) -> Result<ExecutionReceipt, RegistryError> {
        // 1. Stateless validation
        self.validator.validate(&command)?;
        let command_id = command.id()?;

        // 2. Per-name exclusivity for the whole transition
        let _guard = self.locks.lock(command.name());

        // 3-5. Apply against live state
        match self.apply(&command) {
            Ok((outcome, events)) => {
                if let Some(entry) = outcome.entry() {
                    debug_assert!(invariant_owner_present(entry));
                }
                info!(
                    command_id = %command_id.short(),
                    kind = command.type_tag(),
                    name = command.name(),
                    "Command applied"
                );
                Ok(ExecutionReceipt {
                    command_id,
                    outcome,
                    events,
                })
            }
            Err(err) => {
                warn!(
                    command_id = %command_id.short(),
                    kind = command.type_tag(),
                    name = command.name(),
                    error = %err,
                    "Command rejected"
                );
                Err(err)
            }
        }
    }

    fn get_entry(&self, name: &str) -> Result<RegistryEntry, RegistryError> {
        self.store
            .get(name)?
            .ok_or_else(|| RegistryError::NotFound { name: name.to_string() })
    }

    fn list_names(&self) -> Result<Vec<String>, RegistryError> {
        Ok(self.store.entries()?.into_iter().map(|e| e.name).collect())
    }

    fn names_owned_by(&self, owner: &Address) -> Result<Vec<String>, RegistryError> {
        Ok(self
            .store
            .entries()?
            .into_iter()
            .filter(|e| e.is_owned_by(owner))
            .map(|e| e.name)
            .collect())
    }

    fn total_value_locked(&self) -> Result<Coins, RegistryError> {
        self.store
            .entries()?
            .iter()
            .try_fold(Coins::empty(), |acc, e| acc.checked_add(&e.price))
            .ok_or(RegistryError::AmountOverflow)
    }
}
