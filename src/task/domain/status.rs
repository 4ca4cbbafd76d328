//! Task status values and the shared transition guard.

use super::{ParseTaskStatusError, TaskDomainError};
use serde::{Deserialize, Serialize};

/// Progress status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work on the task has not begun.
    #[default]
    NotStarted,
    /// The task is being worked on.
    InProgress,
    /// The task is finished.
    Completed,
}

impl TaskStatus {
    /// All statuses in their cyclic display order.
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Returns the successor in the click-to-advance cycle.
    ///
    /// The cycle wraps from `Completed` back to `NotStarted`; whether that
    /// wrap is allowed is decided by [`Self::can_transition_to`].
    #[must_use]
    pub const fn cycled(self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::NotStarted,
        }
    }

    /// Returns `true` when moving from `self` to `target` is permitted.
    ///
    /// Every interaction path goes through this guard. Only regressing a
    /// completed task straight to not started is rejected; staying on the
    /// same status is a permitted no-op.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        !matches!((self, target), (Self::Completed, Self::NotStarted))
    }

    /// Returns `true` for the completed status.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// A requested status change coming from an interaction path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// Advance to the next status in the cycle.
    Advance,
    /// Pick an explicit status from the list of options.
    Select(TaskStatus),
}

impl StatusChange {
    /// Resolves the target status for a task currently at `current`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the guard
    /// rejects the move, whichever path requested it.
    pub const fn resolve(self, current: TaskStatus) -> Result<TaskStatus, TaskDomainError> {
        let target = match self {
            Self::Advance => current.cycled(),
            Self::Select(status) => status,
        };
        if current.can_transition_to(target) {
            Ok(target)
        } else {
            Err(TaskDomainError::InvalidStatusTransition {
                from: current,
                to: target,
            })
        }
    }
}
