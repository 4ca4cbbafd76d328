//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while validating task values or guarded edits.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the character limit.
    #[error("task title has {length} characters, exceeds limit of {max}")]
    TitleTooLong {
        /// Character count of the trimmed title.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The completion comment exceeds the character limit.
    #[error("completion comment has {length} characters, exceeds limit of {max}")]
    CommentTooLong {
        /// Character count of the comment.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The requested status change is not permitted.
    #[error("cannot move task from {} to {}", .from.as_str(), .to.as_str())]
    InvalidStatusTransition {
        /// Current task status.
        from: TaskStatus,
        /// Requested target status.
        to: TaskStatus,
    },

    /// Completion comments may only be edited on completed tasks.
    #[error("completion comment can only be edited on a completed task, task is {}", .status.as_str())]
    CommentRequiresCompletedStatus {
        /// Current task status.
        status: TaskStatus,
    },

    /// The targeted task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

impl TaskDomainError {
    /// Returns the message shown to a person when this error surfaces.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::TaskNotFound(_) => "That task no longer exists.",
            Self::InvalidStatusTransition { .. } => {
                "A completed task cannot be moved back to not started."
            }
            _ => "Please check your input and try again.",
        }
    }
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task filters from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task filter: {0}")]
pub struct ParseTaskFilterError(pub String);
