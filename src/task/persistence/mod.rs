//! Persistence adapter and the persisted task list schema.

mod adapter;
mod error;
pub mod schema;

pub use adapter::{AVAILABILITY_PROBE_KEY, PersistenceAdapter};
pub use error::{SchemaUpgradeError, StorageError};
pub use schema::{DecodedTaskList, TaskListEnvelope, TaskListUpgrader};
