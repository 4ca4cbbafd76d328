//! Domain model for the task list.
//!
//! Task records, statuses, the view filter and validation rules live here,
//! free of storage and presentation concerns.

mod error;
mod filter;
mod ids;
mod status;
mod task;
mod validation;

pub use error::{ParseTaskFilterError, ParseTaskStatusError, TaskDomainError};
pub use filter::TaskFilter;
pub use ids::TaskId;
pub use status::{StatusChange, TaskStatus};
pub use task::{Task, TaskPatch};
pub use validation::{
    COMMENT_MAX_CHARS, TITLE_MAX_CHARS, validate_completion_comment, validate_title,
};
