//! Actions accepted by the task reducer.

use super::TaskStoreError;
use crate::task::domain::{Task, TaskFilter, TaskId, TaskPatch};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// A state-changing request handled by [`super::reduce`].
///
/// The JSON form is adjacently tagged:
/// `{"type": "ADD_TASK", "payload": {"title": "Buy milk"}}`.
/// Decoding also accepts the older `*_TODO` tags listed in
/// [`Self::LEGACY_TAGS`], with `updates` and `todos` as payload field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskAction {
    /// Appends a new task with the given title.
    #[serde(alias = "ADD_TODO")]
    AddTask {
        /// Raw title; trimmed by the reducer.
        title: String,
    },
    /// Merges a partial update over an existing task.
    #[serde(alias = "UPDATE_TODO")]
    UpdateTask {
        /// Target task.
        id: TaskId,
        /// Fields to replace.
        #[serde(alias = "updates")]
        patch: TaskPatch,
    },
    /// Removes a task.
    #[serde(alias = "DELETE_TODO")]
    DeleteTask {
        /// Target task.
        id: TaskId,
    },
    /// Replaces the task sequence with a caller-ordered list.
    #[serde(alias = "REORDER_TODOS")]
    ReorderTasks {
        /// New sequence, trusted verbatim.
        #[serde(alias = "todos")]
        tasks: Vec<Arc<Task>>,
    },
    /// Replaces the display filter.
    SetFilter {
        /// New filter.
        filter: TaskFilter,
    },
    /// Replaces the task sequence when hydrating from storage.
    #[serde(alias = "LOAD_TODOS")]
    LoadTasks {
        /// Hydrated tasks.
        #[serde(alias = "todos")]
        tasks: Vec<Arc<Task>>,
    },
}

impl TaskAction {
    /// Type tags recognised in the JSON form.
    pub const TAGS: [&'static str; 6] = [
        "ADD_TASK",
        "UPDATE_TASK",
        "DELETE_TASK",
        "REORDER_TASKS",
        "SET_FILTER",
        "LOAD_TASKS",
    ];

    /// Older `*_TODO` tags accepted when decoding. `SET_FILTER` never changed.
    pub const LEGACY_TAGS: [&'static str; 5] = [
        "ADD_TODO",
        "UPDATE_TODO",
        "DELETE_TODO",
        "REORDER_TODOS",
        "LOAD_TODOS",
    ];

    /// Returns `true` when `tag` names an action, current or legacy.
    #[must_use]
    pub fn is_known_tag(tag: &str) -> bool {
        Self::TAGS.contains(&tag) || Self::LEGACY_TAGS.contains(&tag)
    }

    /// Returns the type tag of this action.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::AddTask { .. } => "ADD_TASK",
            Self::UpdateTask { .. } => "UPDATE_TASK",
            Self::DeleteTask { .. } => "DELETE_TASK",
            Self::ReorderTasks { .. } => "REORDER_TASKS",
            Self::SetFilter { .. } => "SET_FILTER",
            Self::LoadTasks { .. } => "LOAD_TASKS",
        }
    }

    /// Decodes an action from its tagged JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::MissingActionTag`] when `type` is absent,
    /// [`TaskStoreError::UnknownAction`] when the tag is in neither
    /// [`Self::TAGS`] nor [`Self::LEGACY_TAGS`], and [`TaskStoreError::MalformedAction`] when the
    /// payload does not match the tag.
    pub fn from_json(value: Value) -> Result<Self, TaskStoreError> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(TaskStoreError::MissingActionTag)?;
        if !Self::is_known_tag(&tag) {
            return Err(TaskStoreError::UnknownAction(tag));
        }
        serde_json::from_value(value).map_err(|error| TaskStoreError::MalformedAction {
            tag,
            reason: error.to_string(),
        })
    }
}
