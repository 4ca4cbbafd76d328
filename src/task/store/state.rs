//! Task list state held by the store.

use crate::task::domain::{Task, TaskFilter, TaskId};
use std::sync::Arc;

/// Snapshot of the task list and its display filter.
///
/// Tasks are shared behind [`Arc`]; entries an action leaves alone keep
/// their allocation, so [`Self::is_same_as`] detects change by pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListState {
    tasks: Vec<Arc<Task>>,
    filter: TaskFilter,
}

impl TaskListState {
    /// Creates an empty state showing all tasks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state holding `tasks` with the `All` filter.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Arc<Task>>) -> Self {
        Self {
            tasks,
            filter: TaskFilter::All,
        }
    }

    pub(crate) const fn from_parts(tasks: Vec<Arc<Task>>, filter: TaskFilter) -> Self {
        Self { tasks, filter }
    }

    /// Returns the tasks in sequence order.
    #[must_use]
    pub fn tasks(&self) -> &[Arc<Task>] {
        &self.tasks
    }

    /// Returns the display filter.
    #[must_use]
    pub const fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when there are no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Arc<Task>> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the tasks passing the filter, sorted by `order`.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<Arc<Task>> {
        let mut visible: Vec<Arc<Task>> = self
            .tasks
            .iter()
            .filter(|task| self.filter.matches(task))
            .cloned()
            .collect();
        visible.sort_by_key(|task| task.order());
        visible
    }

    /// Returns `true` when `other` holds the same filter and the very same
    /// task allocations in the same sequence.
    #[must_use]
    pub fn is_same_as(&self, other: &Self) -> bool {
        self.filter == other.filter
            && self.tasks.len() == other.tasks.len()
            && self
                .tasks
                .iter()
                .zip(&other.tasks)
                .all(|(left, right)| Arc::ptr_eq(left, right))
    }
}
