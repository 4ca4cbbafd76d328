//! Field limits and validation for task values.

use super::TaskDomainError;

/// Maximum title length in characters, counted after trimming.
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum completion comment length in characters.
pub const COMMENT_MAX_CHARS: usize = 500;

/// Trims and validates a task title.
///
/// # Errors
///
/// Returns [`TaskDomainError::EmptyTitle`] for blank input and
/// [`TaskDomainError::TitleTooLong`] when the trimmed title exceeds
/// [`TITLE_MAX_CHARS`].
pub fn validate_title(raw: &str) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    let length = trimmed.chars().count();
    if length > TITLE_MAX_CHARS {
        return Err(TaskDomainError::TitleTooLong {
            length,
            max: TITLE_MAX_CHARS,
        });
    }
    Ok(trimmed.to_owned())
}

/// Validates a completion comment length.
///
/// # Errors
///
/// Returns [`TaskDomainError::CommentTooLong`] when the comment exceeds
/// [`COMMENT_MAX_CHARS`].
pub fn validate_completion_comment(raw: &str) -> Result<&str, TaskDomainError> {
    let length = raw.chars().count();
    if length > COMMENT_MAX_CHARS {
        return Err(TaskDomainError::CommentTooLong {
            length,
            max: COMMENT_MAX_CHARS,
        });
    }
    Ok(raw)
}
