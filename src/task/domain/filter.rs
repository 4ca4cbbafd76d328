//! View filter selecting which tasks are displayed.

use super::{ParseTaskFilterError, Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Display filter over the task list. Never affects stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFilter {
    /// Show every task.
    #[default]
    All,
    /// Show tasks that have not started.
    NotStarted,
    /// Show tasks in progress.
    InProgress,
    /// Show completed tasks.
    Completed,
}

impl TaskFilter {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` when the given status passes the filter.
    #[must_use]
    pub const fn allows(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::NotStarted => matches!(status, TaskStatus::NotStarted),
            Self::InProgress => matches!(status, TaskStatus::InProgress),
            Self::Completed => matches!(status, TaskStatus::Completed),
        }
    }

    /// Returns `true` when the task passes the filter.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        self.allows(task.status())
    }
}

impl From<TaskStatus> for TaskFilter {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::NotStarted => Self::NotStarted,
            TaskStatus::InProgress => Self::InProgress,
            TaskStatus::Completed => Self::Completed,
        }
    }
}

impl TryFrom<&str> for TaskFilter {
    type Error = ParseTaskFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        if normalized == "all" {
            return Ok(Self::All);
        }
        TaskStatus::try_from(normalized.as_str())
            .map(Self::from)
            .map_err(|_| ParseTaskFilterError(value.to_owned()))
    }
}
