use std::collections::HashMap;

use parking_lot::RwLock;
use shared_types::{Address, Coins};
use tracing::debug;

use crate::domain::errors::{CommitError, LedgerError, StoreError};
use crate::ports::Ledger;

/// In-memory implementation of Ledger
///
/// Both legs of a transfer are applied under one write lock, so a transfer is
/// either fully visible or not at all.
pub struct InMemoryLedger {
    balances: RwLock<HashMap<Address, Coins>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self {
            balances: RwLock::new(HashMap::new()),
        }
    }

    /// Seed genesis balances.
    pub fn with_balances(balances: impl IntoIterator<Item = (Address, Coins)>) -> Self {
        Self {
            balances: RwLock::new(balances.into_iter().collect()),
        }
    }

    /// Credit `account` out of thin air (genesis / faucet).
    pub fn mint(&self, account: &Address, amount: &Coins) -> Result<(), LedgerError> {
        let mut balances = self.balances.write();
        let current = balances.get(account).cloned().unwrap_or_default();
        let next = current
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Overflow(account.clone()))?;
        balances.insert(account.clone(), next);
        Ok(())
    }

    /// Sum of every balance held.
    pub fn total_supply(&self) -> Option<Coins> {
        self.balances
            .read()
            .values()
            .try_fold(Coins::empty(), |acc, coins| acc.checked_add(coins))
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLedger {
    /// Check and stage both legs, run `commit`, then apply the legs.
    ///
    /// The write lock is held across `commit`, so no other transfer can
    /// observe or spend the pending credit before the paired write lands.
    fn move_funds<E, F>(&self, from: &Address, to: &Address, amount: &Coins, commit: F) -> Result<(), E>
    where
        E: From<LedgerError>,
        F: FnOnce() -> Result<(), E>,
    {
        for account in [from, to] {
            if !account.is_well_formed() {
                return Err(LedgerError::InvalidAccount(account.clone()).into());
            }
        }

        let mut balances = self.balances.write();
        let available = balances.get(from).cloned().unwrap_or_default();
        let debited = available.checked_sub(amount).ok_or_else(|| LedgerError::InsufficientFunds {
            account: from.clone(),
            required: amount.clone(),
            available: available.clone(),
        })?;

        if from == to {
            return commit();
        }

        let credited = balances
            .get(to)
            .cloned()
            .unwrap_or_default()
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Overflow(to.clone()))?;

        commit()?;

        balances.insert(from.clone(), debited);
        balances.insert(to.clone(), credited);
        debug!(from = %from, to = %to, amount = %amount, "Transfer applied");
        Ok(())
    }
}

impl Ledger for InMemoryLedger {
    fn transfer(&self, from: &Address, to: &Address, amount: &Coins) -> Result<(), LedgerError> {
        self.move_funds(from, to, amount, || Ok(()))
    }

    fn transfer_then<F>(
        &self,
        from: &Address,
        to: &Address,
        amount: &Coins,
        commit: F,
    ) -> Result<(), CommitError>
    where
        F: FnOnce() -> Result<(), StoreError>,
    {
        self.move_funds(from, to, amount, || commit().map_err(CommitError::from))
    }

    fn balance(&self, account: &Address) -> Coins {
        self.balances.read().get(account).cloned().unwrap_or_default()
    }
}
