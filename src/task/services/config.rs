//! Configuration for the task store controller.

use std::time::Duration;

/// Default storage key for the persisted task list.
pub const DEFAULT_STORAGE_KEY: &str = "tasklane-data";

/// Settings for [`super::TaskStoreController`].
///
/// # Examples
///
/// ```
/// use tasklane::task::services::TaskStoreConfig;
///
/// let config = TaskStoreConfig::default();
/// assert_eq!(config.storage_key, "tasklane-data");
/// assert!(config.persist_on_change);
///
/// let ephemeral = TaskStoreConfig::ephemeral();
/// assert!(!ephemeral.persist_on_change);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStoreConfig {
    /// Key holding the persisted task list.
    pub storage_key: String,
    /// Pause before [`super::activate_after`] hands over the controller.
    pub loading_delay: Duration,
    /// Whether state changes are written back to storage.
    pub persist_on_change: bool,
}

impl Default for TaskStoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            loading_delay: Duration::from_millis(500),
            persist_on_change: true,
        }
    }
}

impl TaskStoreConfig {
    /// Creates a configuration that hydrates but never writes back.
    ///
    /// Useful for read-only previews and tests.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            persist_on_change: false,
            ..Default::default()
        }
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Sets the loading delay.
    #[must_use]
    pub const fn with_loading_delay(mut self, loading_delay: Duration) -> Self {
        self.loading_delay = loading_delay;
        self
    }
}
