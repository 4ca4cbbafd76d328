//! Key-value string store port backing task persistence.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type KeyValueResult<T> = Result<T, KeyValueStoreError>;

/// String-keyed, string-valued storage contract.
///
/// Mirrors the browser local storage surface: values are opaque strings and
/// the store makes no promise about durability beyond its own medium.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`.
    ///
    /// Returns `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError`] when the store cannot be read.
    fn get(&self, key: &str) -> KeyValueResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError::QuotaExceeded`] when the value does not
    /// fit, or another variant when the store rejects the write.
    fn set(&self, key: &str, value: &str) -> KeyValueResult<()>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueStoreError`] when the store rejects the removal.
    fn remove(&self, key: &str) -> KeyValueResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum KeyValueStoreError {
    /// The store cannot be reached at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The write would exceed the store's capacity.
    #[error("storage quota exceeded writing {key}: {requested_bytes} bytes requested, quota is {quota_bytes}")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Total bytes the store would hold after the write.
        requested_bytes: usize,
        /// Capacity of the store in bytes.
        quota_bytes: usize,
    },

    /// The store refused access.
    #[error("storage access denied: {0}")]
    AccessDenied(String),

    /// The key cannot be represented by this store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(Arc<std::io::Error>),
}

impl KeyValueStoreError {
    /// Wraps an I/O error, mapping permission failures to
    /// [`Self::AccessDenied`].
    #[must_use]
    pub fn io(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            Self::AccessDenied(err.to_string())
        } else {
            Self::Io(Arc::new(err))
        }
    }
}
