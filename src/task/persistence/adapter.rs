//! Capture-and-report persistence over a key-value store.

use super::StorageError;
use crate::task::ports::KeyValueStore;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Key written and removed by [`PersistenceAdapter::is_available`].
pub const AVAILABILITY_PROBE_KEY: &str = "__storage_test__";

/// JSON persistence that never propagates storage failures.
///
/// Reads fall back to a caller-supplied default. Writes and removals record
/// their failure in an error slot readable through [`Self::last_error`];
/// the next successful write or removal clears it.
#[derive(Debug)]
pub struct PersistenceAdapter<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    last_error: Mutex<Option<StorageError>>,
}

impl<S> PersistenceAdapter<S>
where
    S: KeyValueStore,
{
    /// Creates an adapter over `store` with an empty error slot.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self {
            store,
            last_error: Mutex::new(None),
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Reads and decodes the JSON value under `key`.
    ///
    /// Returns `default` when the key is absent, the store fails, or the
    /// stored text does not decode as `T`. Failures are logged, not
    /// returned.
    pub fn read<T>(&self, key: &str, default: T) -> T
    where
        T: DeserializeOwned,
    {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(error) => {
                warn!(key, %error, "storage read failed, using default");
                return default;
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|error| {
            warn!(key, %error, "stored value is not valid, using default");
            default
        })
    }

    /// Serializes `value` as JSON and stores it under `key`.
    ///
    /// Failures are recorded in the error slot and logged; the caller's
    /// in-memory value is unaffected either way.
    pub fn write<T>(&self, key: &str, value: &T)
    where
        T: Serialize + ?Sized,
    {
        let outcome = serde_json::to_string(value)
            .map_err(|error| StorageError::Serialization {
                key: key.to_owned(),
                reason: error.to_string(),
            })
            .and_then(|encoded| self.store.set(key, &encoded).map_err(StorageError::from));
        self.record(key, "write", outcome);
    }

    /// Removes `key` from the store, recording failures like [`Self::write`].
    pub fn remove(&self, key: &str) {
        let outcome = self.store.remove(key).map_err(StorageError::from);
        self.record(key, "remove", outcome);
    }

    /// Probes the store with a throwaway write and removal.
    ///
    /// Diagnostic only; the error slot is left untouched.
    #[must_use]
    pub fn is_available(&self) -> bool {
        let probe = self
            .store
            .set(AVAILABILITY_PROBE_KEY, AVAILABILITY_PROBE_KEY)
            .and_then(|()| self.store.remove(AVAILABILITY_PROBE_KEY));
        if let Err(error) = &probe {
            debug!(%error, "storage availability probe failed");
        }
        probe.is_ok()
    }

    /// Returns the failure of the most recent write or removal, if it failed.
    #[must_use]
    pub fn last_error(&self) -> Option<StorageError> {
        self.slot().clone()
    }

    fn record(&self, key: &str, operation: &str, outcome: Result<(), StorageError>) {
        let mut slot = self.slot();
        match outcome {
            Ok(()) => *slot = None,
            Err(error) => {
                warn!(key, operation, %error, "storage operation failed");
                *slot = Some(error);
            }
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<StorageError>> {
        self.last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
