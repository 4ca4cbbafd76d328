//! Given steps for task store BDD scenarios.

use super::world::TaskStoreWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;
use std::sync::Arc;
use tasklane::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{StatusChange, TaskStatus},
    ports::KeyValueStore,
    services::DEFAULT_STORAGE_KEY,
};

#[given("an empty task store")]
fn empty_task_store(world: &mut TaskStoreWorld) {
    world.store = Arc::new(InMemoryKeyValueStore::new());
    world.controller = None;
}

#[given(r#"a legacy task list containing "{title}""#)]
fn legacy_task_list(world: &mut TaskStoreWorld, title: String) -> Result<(), eyre::Report> {
    let legacy = json!([{
        "id": uuid::Uuid::new_v4().to_string(),
        "title": title,
        "status": "not_started",
        "createdAt": "2024-01-01T09:00:00Z",
        "updatedAt": "2024-01-01T09:00:00Z",
        "order": 0
    }]);
    world
        .store
        .set(DEFAULT_STORAGE_KEY, &legacy.to_string())
        .wrap_err("seed legacy task list")
}

#[given("the stored task list is corrupt")]
fn corrupt_task_list(world: &mut TaskStoreWorld) -> Result<(), eyre::Report> {
    world
        .store
        .set(DEFAULT_STORAGE_KEY, "invalid-json{")
        .wrap_err("seed corrupt task list")
}

#[given("storage rejects writes")]
fn storage_rejects_writes(world: &mut TaskStoreWorld) {
    world.store = Arc::new(InMemoryKeyValueStore::with_quota(0));
    world.controller = None;
}

#[given(r#"a task titled "{title}""#)]
fn task_titled(world: &mut TaskStoreWorld, title: String) {
    world.controller().add_task(title);
}

#[given(r#"the task "{title}" is completed"#)]
fn task_is_completed(world: &mut TaskStoreWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    world
        .controller()
        .change_status(id, StatusChange::Select(TaskStatus::Completed))
        .wrap_err("complete task in scenario setup")?;
    Ok(())
}
