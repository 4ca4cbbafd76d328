//! Pure state transitions for the task list.

use super::{TaskAction, TaskListState};
use crate::task::domain::{Task, TaskId, TaskPatch};
use mockable::Clock;
use std::sync::Arc;

/// Applies `action` to `state` and returns the next state.
///
/// The input is never modified. Rejected input (a blank title, an unknown
/// task identifier) yields a clone of `state`, which [`TaskListState::is_same_as`]
/// reports as unchanged. The match is exhaustive over the closed action set;
/// unknown tags are rejected earlier by [`TaskAction::from_json`].
#[must_use]
pub fn reduce(state: &TaskListState, action: TaskAction, clock: &impl Clock) -> TaskListState {
    match action {
        TaskAction::AddTask { title } => add_task(state, &title, clock),
        TaskAction::UpdateTask { id, patch } => update_task(state, id, &patch, clock),
        TaskAction::DeleteTask { id } => delete_task(state, id),
        TaskAction::ReorderTasks { tasks } | TaskAction::LoadTasks { tasks } => {
            TaskListState::from_parts(tasks, state.filter())
        }
        TaskAction::SetFilter { filter } => TaskListState::from_parts(state.tasks().to_vec(), filter),
    }
}

fn add_task(state: &TaskListState, title: &str, clock: &impl Clock) -> TaskListState {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return state.clone();
    }
    let order = u64::try_from(state.len()).unwrap_or(u64::MAX);
    let mut tasks = state.tasks().to_vec();
    tasks.push(Arc::new(Task::new(trimmed, order, clock)));
    TaskListState::from_parts(tasks, state.filter())
}

fn update_task(
    state: &TaskListState,
    id: TaskId,
    patch: &TaskPatch,
    clock: &impl Clock,
) -> TaskListState {
    if state.find(id).is_none() {
        return state.clone();
    }
    let tasks = state
        .tasks()
        .iter()
        .map(|task| {
            if task.id() == id {
                Arc::new(task.patched(patch, clock))
            } else {
                Arc::clone(task)
            }
        })
        .collect();
    TaskListState::from_parts(tasks, state.filter())
}

fn delete_task(state: &TaskListState, id: TaskId) -> TaskListState {
    if state.find(id).is_none() {
        return state.clone();
    }
    let tasks = state
        .tasks()
        .iter()
        .filter(|task| task.id() != id)
        .cloned()
        .collect();
    TaskListState::from_parts(tasks, state.filter())
}
