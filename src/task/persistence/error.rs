//! Errors captured by the persistence adapter.

use crate::task::domain::{TaskDomainError, TaskId};
use crate::task::ports::KeyValueStoreError;
use thiserror::Error;

/// Failure recorded in the persistence adapter's error slot.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The key-value store rejected the operation.
    #[error(transparent)]
    Store(#[from] KeyValueStoreError),

    /// The value could not be serialized.
    #[error("failed to serialize value for {key}: {reason}")]
    Serialization {
        /// Key being written.
        key: String,
        /// Serializer failure description.
        reason: String,
    },
}

impl StorageError {
    /// Returns the message shown to a person when saving fails.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        "There was a problem saving your data. Please try again."
    }

    /// Returns `true` when retrying later may succeed.
    ///
    /// Serialization failures and invalid keys are defects that retrying
    /// cannot fix.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Serialization { .. } | Self::Store(KeyValueStoreError::InvalidKey(_))
        )
    }
}

/// Errors raised while upgrading or decoding a persisted task list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaUpgradeError {
    /// The payload declares a version this build cannot read.
    #[error("unsupported task list version: {0}")]
    UnsupportedVersion(u64),

    /// The payload shape is not recognised.
    #[error("malformed task list payload: {0}")]
    Malformed(String),

    /// A task record does not decode and was dropped.
    #[error("malformed task record at index {index}: {reason}")]
    MalformedRecord {
        /// Position of the record in the payload.
        index: usize,
        /// Decoder failure description.
        reason: String,
    },

    /// A task record violates the field limits.
    #[error("invalid task record at index {index}: {source}")]
    InvalidRecord {
        /// Position of the record in the payload.
        index: usize,
        /// Validation failure.
        source: TaskDomainError,
    },

    /// A record repeats an earlier identifier and was dropped.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),
}

impl SchemaUpgradeError {
    /// Creates a malformed-payload error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}
