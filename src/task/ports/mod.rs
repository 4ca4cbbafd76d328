//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the persistence
//! adapter and the store controller.

pub mod key_value;

pub use key_value::{KeyValueResult, KeyValueStore, KeyValueStoreError};
