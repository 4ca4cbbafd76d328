//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::ports::{KeyValueResult, KeyValueStore, KeyValueStoreError};

/// Thread-safe in-memory key-value store.
///
/// An optional byte quota models the capacity limit of browser storage:
/// the sum of key and value lengths across all entries may not exceed it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store holding at most `quota_bytes`.
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Returns the number of stored entries.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::Unavailable`] if the lock is poisoned.
    pub fn len(&self) -> KeyValueResult<usize> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.len())
    }
}

fn poisoned<E: std::fmt::Display>(err: E) -> KeyValueStoreError {
    KeyValueStoreError::Unavailable(err.to_string())
}

fn entry_bytes(key: &str, value: &str) -> usize {
    key.len().saturating_add(value.len())
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        if let Some(quota_bytes) = self.quota_bytes {
            let requested_bytes = entries
                .iter()
                .filter(|(existing, _)| existing.as_str() != key)
                .map(|(existing, stored)| entry_bytes(existing, stored))
                .fold(entry_bytes(key, value), usize::saturating_add);
            if requested_bytes > quota_bytes {
                return Err(KeyValueStoreError::QuotaExceeded {
                    key: key.to_owned(),
                    requested_bytes,
                    quota_bytes,
                });
            }
        }
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> KeyValueResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
