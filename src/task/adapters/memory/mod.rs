//! In-memory adapters, used by tests and ephemeral sessions.

mod key_value;

pub use key_value::InMemoryKeyValueStore;
