//! Multi-step editing sessions across restarts.

use super::helpers::{activate, id_of, store, visible_titles};
use eyre::{Result, ensure, eyre};
use rstest::rstest;
use std::sync::Arc;
use tasklane::task::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{StatusChange, TaskFilter, TaskPatch, TaskStatus},
};

#[rstest]
fn edits_persist_across_restarts(store: Arc<InMemoryKeyValueStore>) -> Result<()> {
    let mut first = activate(&store);
    for title in ["Draft agenda", "Book room", "Send invites"] {
        first.add_task(title);
    }
    let agenda = id_of(&first, "Draft agenda")?;
    first
        .change_status(agenda, StatusChange::Select(TaskStatus::Completed))
        .map_err(|err| eyre!(err))?;
    first
        .set_completion_comment(agenda, "Shared with the team")
        .map_err(|err| eyre!(err))?;
    let invites = id_of(&first, "Send invites")?;
    ensure!(first.move_task(invites, agenda), "drop should move the task");
    drop(first.close());

    let second = activate(&store);
    ensure!(
        visible_titles(&second) == ["Send invites", "Draft agenda", "Book room"],
        "order should persist, got {:?}",
        visible_titles(&second)
    );
    let restored = second
        .state()
        .find(agenda)
        .ok_or_else(|| eyre!("agenda task missing after restart"))?;
    ensure!(restored.status() == TaskStatus::Completed, "status should persist");
    ensure!(
        restored.completion_comment() == Some("Shared with the team"),
        "comment should persist"
    );
    Ok(())
}

#[rstest]
fn filter_applies_within_session_only(store: Arc<InMemoryKeyValueStore>) -> Result<()> {
    let mut first = activate(&store);
    first.add_task("Open");
    first.add_task("Underway");
    let underway = id_of(&first, "Underway")?;
    first.update_task(underway, TaskPatch::new().with_status(TaskStatus::InProgress));

    first.set_filter(TaskFilter::InProgress);
    ensure!(visible_titles(&first) == ["Underway"], "filter should narrow the view");
    ensure!(first.state().len() == 2, "filter must not drop tasks");
    drop(first.close());

    let second = activate(&store);
    ensure!(second.state().filter() == TaskFilter::All, "filter should reset");
    ensure!(visible_titles(&second).len() == 2, "all tasks should show");
    Ok(())
}

#[rstest]
fn deleting_everything_persists_an_empty_list(store: Arc<InMemoryKeyValueStore>) -> Result<()> {
    let mut first = activate(&store);
    first.add_task("Temporary");
    first.delete_task(id_of(&first, "Temporary")?);
    drop(first.close());

    let second = activate(&store);
    ensure!(second.state().is_empty(), "deletion should persist");
    Ok(())
}
