//! Shared helpers for in-memory task store integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use tasklane::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::TaskId,
    services::{TaskStoreConfig, TaskStoreController},
};

/// Controller type used across the integration tests.
pub type MemoryController = TaskStoreController<InMemoryKeyValueStore, DefaultClock>;

/// Provides a fresh shared in-memory store for each test.
#[fixture]
pub fn store() -> Arc<InMemoryKeyValueStore> {
    Arc::new(InMemoryKeyValueStore::new())
}

/// Activates a controller over `store` without a loading delay.
pub fn activate(store: &Arc<InMemoryKeyValueStore>) -> MemoryController {
    TaskStoreController::activate(
        Arc::clone(store),
        Arc::new(DefaultClock),
        TaskStoreConfig::default().with_loading_delay(std::time::Duration::ZERO),
    )
}

/// Returns the identifier of the task titled `title`.
///
/// # Errors
///
/// Returns an error if no task carries the title.
pub fn id_of(controller: &MemoryController, title: &str) -> eyre::Result<TaskId> {
    controller
        .state()
        .tasks()
        .iter()
        .find(|task| task.title() == title)
        .map(|task| task.id())
        .ok_or_else(|| eyre::eyre!("no task titled {title:?}"))
}

/// Returns the visible titles in display order.
pub fn visible_titles(controller: &MemoryController) -> Vec<String> {
    controller
        .visible_tasks()
        .iter()
        .map(|task| task.title().to_owned())
        .collect()
}
