use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::domain::entities::RegistryEntry;
use crate::domain::errors::StoreError;
use crate::ports::RegistryStore;

/// In-memory implementation of RegistryStore
pub struct InMemoryRegistryStore {
    entries: RwLock<BTreeMap<String, RegistryEntry>>,
}

impl InMemoryRegistryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Seed the store, e.g. from a state export.
    pub fn with_entries(entries: impl IntoIterator<Item = RegistryEntry>) -> Self {
        let map = entries
            .into_iter()
            .map(|entry| (entry.name.clone(), entry))
            .collect();
        Self {
            entries: RwLock::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Default for InMemoryRegistryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryStore for InMemoryRegistryStore {
    fn get(&self, name: &str) -> Result<Option<RegistryEntry>, StoreError> {
        Ok(self.entries.read().get(name).cloned())
    }

    fn put(&self, entry: RegistryEntry) -> Result<(), StoreError> {
        self.entries.write().insert(entry.name.clone(), entry);
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), StoreError> {
        self.entries.write().remove(name);
        Ok(())
    }

    fn exists(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.entries.read().contains_key(name))
    }

    fn entries(&self) -> Result<Vec<RegistryEntry>, StoreError> {
        Ok(self.entries.read().values().cloned().collect())
    }
}
