//! When steps for task store BDD scenarios.

use super::world::TaskStoreWorld;
use rstest_bdd_macros::when;
use tasklane::task::domain::{StatusChange, TaskFilter, TaskStatus};

#[when(r#"the task "{title}" is added"#)]
fn add_task(world: &mut TaskStoreWorld, title: String) {
    world.controller().add_task(title);
}

#[when(r#"the task "{title}" is advanced"#)]
fn advance_task(world: &mut TaskStoreWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    let result = world.controller().change_status(id, StatusChange::Advance);
    world.last_status_result = Some(result);
    Ok(())
}

#[when(r#"the task "{title}" is set to "{status}""#)]
fn select_status(
    world: &mut TaskStoreWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let id = world.id_of(&title)?;
    let result = world
        .controller()
        .change_status(id, StatusChange::Select(target));
    world.last_status_result = Some(result);
    Ok(())
}

#[when(r#"the filter is set to "{filter}""#)]
fn set_filter(world: &mut TaskStoreWorld, filter: String) -> Result<(), eyre::Report> {
    let parsed = TaskFilter::try_from(filter.as_str())
        .map_err(|err| eyre::eyre!("invalid filter in scenario: {err}"))?;
    world.controller().set_filter(parsed);
    Ok(())
}

#[when(r#"the task "{dragged}" is dropped onto "{target}""#)]
fn drop_task(
    world: &mut TaskStoreWorld,
    dragged: String,
    target: String,
) -> Result<(), eyre::Report> {
    let dragged_id = world.id_of(&dragged)?;
    let target_id = world.id_of(&target)?;
    if !world.controller().move_task(dragged_id, target_id) {
        return Err(eyre::eyre!("dropping {dragged:?} onto {target:?} moved nothing"));
    }
    Ok(())
}

#[when("the store is restarted")]
fn restart_store(world: &mut TaskStoreWorld) {
    world.restart();
}
