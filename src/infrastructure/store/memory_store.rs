//! In-memory redirect store.

use crate::domain::{RedirectStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;

/// A fixed mapping held in memory.
///
/// Built once and never mutated, so it can be shared across requests behind
/// an `Arc` without locking. Lookups never fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the store with one more mapping added.
    pub fn with_entry(mut self, path: impl Into<String>, target: impl Into<String>) -> Self {
        self.entries.insert(path.into(), target.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[async_trait]
impl RedirectStore for MemoryStore {
    async fn lookup(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }
}
