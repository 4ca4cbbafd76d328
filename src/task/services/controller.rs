//! Store controller wiring the reducer to persistence.

use super::{TaskStoreConfig, reorder::move_onto};
use crate::task::{
    domain::{
        StatusChange, Task, TaskDomainError, TaskFilter, TaskId, TaskPatch, TaskStatus,
        validate_completion_comment,
    },
    persistence::{PersistenceAdapter, StorageError, TaskListEnvelope, TaskListUpgrader},
    ports::KeyValueStore,
    store::{TaskAction, TaskListState, TaskStoreError, reduce},
};
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Owns the task list state and keeps storage in step with it.
///
/// Constructed explicitly with [`Self::activate`] and released with
/// [`Self::close`]; there is no shared global instance.
pub struct TaskStoreController<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    state: TaskListState,
    persistence: PersistenceAdapter<S>,
    clock: Arc<C>,
    config: TaskStoreConfig,
}

impl<S, C> TaskStoreController<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Hydrates the controller from storage.
    ///
    /// A missing or unreadable payload starts an empty list; problems in
    /// single records only affect those records. The filter always starts
    /// at [`TaskFilter::All`].
    #[must_use]
    pub fn activate(store: Arc<S>, clock: Arc<C>, config: TaskStoreConfig) -> Self {
        let persistence = PersistenceAdapter::new(store);
        let tasks = load_tasks(&persistence, &config.storage_key);
        debug!(
            key = config.storage_key.as_str(),
            count = tasks.len(),
            "task store activated"
        );
        Self {
            state: TaskListState::with_tasks(tasks),
            persistence,
            clock,
            config,
        }
    }

    /// Returns the current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &TaskListState {
        &self.state
    }

    /// Returns the tasks passing the current filter, sorted by `order`.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<Arc<Task>> {
        self.state.visible_tasks()
    }

    /// Returns the controller configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskStoreConfig {
        &self.config
    }

    /// Returns the failure of the latest storage write, if it failed.
    #[must_use]
    pub fn storage_error(&self) -> Option<StorageError> {
        self.persistence.last_error()
    }

    /// Probes whether the backing store accepts writes.
    #[must_use]
    pub fn is_storage_available(&self) -> bool {
        self.persistence.is_available()
    }

    /// Applies `action` and writes the tasks back when the state changed.
    ///
    /// Writes are fire and forget: a failed write is recorded in
    /// [`Self::storage_error`] and the new state is kept.
    pub fn dispatch(&mut self, action: TaskAction) {
        let tag = action.tag();
        let next = reduce(&self.state, action, &*self.clock);
        if next.is_same_as(&self.state) {
            trace!(action = tag, "action left state unchanged");
            return;
        }
        debug!(action = tag, tasks = next.len(), "state changed");
        self.state = next;
        self.persist();
    }

    /// Decodes a tagged JSON action and dispatches it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when the action tag is missing or unknown
    /// or its payload is malformed. These indicate a defect in the caller.
    pub fn dispatch_json(&mut self, action: Value) -> Result<(), TaskStoreError> {
        let decoded = TaskAction::from_json(action)?;
        self.dispatch(decoded);
        Ok(())
    }

    /// Adds a task. Blank titles are ignored.
    pub fn add_task(&mut self, title: impl Into<String>) {
        self.dispatch(TaskAction::AddTask {
            title: title.into(),
        });
    }

    /// Merges `patch` over the task. Unknown identifiers are ignored.
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) {
        self.dispatch(TaskAction::UpdateTask { id, patch });
    }

    /// Deletes the task. Unknown identifiers are ignored.
    pub fn delete_task(&mut self, id: TaskId) {
        self.dispatch(TaskAction::DeleteTask { id });
    }

    /// Replaces the task sequence with `tasks` verbatim.
    pub fn reorder_tasks(&mut self, tasks: Vec<Arc<Task>>) {
        self.dispatch(TaskAction::ReorderTasks { tasks });
    }

    /// Replaces the display filter.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.dispatch(TaskAction::SetFilter { filter });
    }

    /// Changes a task's status through the shared transition guard.
    ///
    /// Returns the resulting status. Requesting the current status is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotFound`] for unknown tasks and
    /// [`TaskDomainError::InvalidStatusTransition`] when the guard rejects
    /// the change.
    pub fn change_status(
        &mut self,
        id: TaskId,
        change: StatusChange,
    ) -> Result<TaskStatus, TaskDomainError> {
        let current = self.existing(id)?.status();
        let target = change.resolve(current)?;
        if target != current {
            self.update_task(id, TaskPatch::new().with_status(target));
        }
        Ok(target)
    }

    /// Sets or clears the completion comment of a completed task.
    ///
    /// The comment is trimmed; a blank comment clears it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotFound`] for unknown tasks,
    /// [`TaskDomainError::CommentRequiresCompletedStatus`] unless the task is
    /// completed, and [`TaskDomainError::CommentTooLong`] for oversized
    /// comments.
    pub fn set_completion_comment(
        &mut self,
        id: TaskId,
        comment: &str,
    ) -> Result<(), TaskDomainError> {
        let status = self.existing(id)?.status();
        if !status.is_completed() {
            return Err(TaskDomainError::CommentRequiresCompletedStatus { status });
        }
        let trimmed = validate_completion_comment(comment.trim())?;
        let patch = if trimmed.is_empty() {
            TaskPatch::new().clearing_completion_comment()
        } else {
            TaskPatch::new().with_completion_comment(trimmed)
        };
        self.update_task(id, patch);
        Ok(())
    }

    /// Drops `dragged` onto `target`, renumbering positions densely.
    ///
    /// Returns `false` when nothing moved: a self-drop or an unknown task.
    pub fn move_task(&mut self, dragged: TaskId, target: TaskId) -> bool {
        let Some(tasks) = move_onto(self.state.tasks(), dragged, target) else {
            return false;
        };
        self.reorder_tasks(tasks);
        true
    }

    /// Removes the persisted task list without touching in-memory state.
    pub fn clear_persisted(&self) {
        self.persistence.remove(&self.config.storage_key);
    }

    /// Releases the controller and returns its final state.
    #[must_use]
    pub fn close(self) -> TaskListState {
        debug!(
            key = self.config.storage_key.as_str(),
            tasks = self.state.len(),
            "task store closed"
        );
        self.state
    }

    fn existing(&self, id: TaskId) -> Result<&Arc<Task>, TaskDomainError> {
        self.state.find(id).ok_or(TaskDomainError::TaskNotFound(id))
    }

    fn persist(&self) {
        if !self.config.persist_on_change {
            return;
        }
        self.persistence.write(
            &self.config.storage_key,
            &TaskListEnvelope::current(self.state.tasks()),
        );
    }
}

fn load_tasks<S>(persistence: &PersistenceAdapter<S>, key: &str) -> Vec<Arc<Task>>
where
    S: KeyValueStore,
{
    let Some(payload) = persistence.read::<Option<Value>>(key, None) else {
        return Vec::new();
    };
    let decoded = match TaskListUpgrader::new().decode(payload) {
        Ok(list) => list,
        Err(error) => {
            warn!(key, %error, "persisted task list rejected, starting empty");
            return Vec::new();
        }
    };
    for issue in &decoded.issues {
        warn!(key, %issue, "persisted task record needs attention");
    }
    decoded.tasks
}
