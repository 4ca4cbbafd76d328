//! Then steps for task store BDD scenarios.

use super::world::TaskStoreWorld;
use rstest_bdd_macros::then;
use tasklane::task::domain::{TaskDomainError, TaskFilter, TaskStatus};

#[then("the task count is {count:usize}")]
fn task_count_is(world: &mut TaskStoreWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.controller().state().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}

#[then(r#"the tasks in display order are "{titles}""#)]
fn tasks_in_display_order(world: &mut TaskStoreWorld, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = titles.split(", ").collect();
    let visible = world.controller().visible_tasks();
    let actual: Vec<&str> = visible.iter().map(|task| task.title()).collect();
    if actual != expected {
        return Err(eyre::eyre!("expected {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("no tasks are visible")]
fn no_tasks_visible(world: &mut TaskStoreWorld) -> Result<(), eyre::Report> {
    let visible = world.controller().visible_tasks();
    if !visible.is_empty() {
        return Err(eyre::eyre!("expected no visible tasks, found {}", visible.len()));
    }
    Ok(())
}

#[then(r#"the filter is "{filter}""#)]
fn filter_is(world: &mut TaskStoreWorld, filter: String) -> Result<(), eyre::Report> {
    let expected = TaskFilter::try_from(filter.as_str())
        .map_err(|err| eyre::eyre!("invalid filter in scenario: {err}"))?;
    let actual = world.controller().state().filter();
    if actual != expected {
        return Err(eyre::eyre!(
            "expected filter {}, found {}",
            expected.as_str(),
            actual.as_str()
        ));
    }
    Ok(())
}

#[then(r#"the task "{title}" has status "{status}""#)]
fn task_has_status(
    world: &mut TaskStoreWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let id = world.id_of(&title)?;
    let actual = world
        .controller()
        .state()
        .find(id)
        .map(|task| task.status())
        .ok_or_else(|| eyre::eyre!("missing task {title:?}"))?;
    if actual != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            actual.as_str()
        ));
    }
    Ok(())
}

#[then("the status change is rejected")]
fn status_change_rejected(world: &TaskStoreWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_status_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status change result"))?;
    if !matches!(result, Err(TaskDomainError::InvalidStatusTransition { .. })) {
        return Err(eyre::eyre!(
            "expected InvalidStatusTransition error, got {result:?}"
        ));
    }
    Ok(())
}

#[then("a storage error is reported")]
fn storage_error_reported(world: &mut TaskStoreWorld) -> Result<(), eyre::Report> {
    if world.controller().storage_error().is_none() {
        return Err(eyre::eyre!("expected a storage error"));
    }
    Ok(())
}
