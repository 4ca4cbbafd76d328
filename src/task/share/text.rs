//! Share text and intent URL construction.

use super::ShareConfig;
use crate::task::domain::{Task, TaskStatus};
use minijinja::{Environment, context};
use thiserror::Error;
use url::Url;

/// Errors raised while building share output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShareError {
    /// The configured template failed to render.
    #[error("failed to render share template: {0}")]
    TemplateRender(String),

    /// The configured intent endpoint is not a valid URL.
    #[error("invalid share intent URL: {0}")]
    InvalidUrl(String),
}

/// Returns the human label for a status.
#[must_use]
pub const fn status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::NotStarted => "Not Started",
        TaskStatus::InProgress => "In Progress",
        TaskStatus::Completed => "Completed",
    }
}

/// Renders the share text for a task.
///
/// The completion comment is appended on its own line only for completed
/// tasks, and only while the whole text stays within
/// [`ShareConfig::max_text_chars`].
///
/// # Errors
///
/// Returns [`ShareError::TemplateRender`] when the template is invalid.
pub fn share_text(task: &Task, config: &ShareConfig) -> Result<String, ShareError> {
    let title = display_title(task.title(), config);
    let environment = Environment::new();
    let base = environment
        .render_str(
            &config.template,
            context! { title => title, status => status_label(task.status()) },
        )
        .map_err(|error| ShareError::TemplateRender(error.to_string()))?;

    let appended = task
        .completion_comment()
        .filter(|comment| task.status().is_completed() && !comment.is_empty());
    let Some(comment) = appended else {
        return Ok(base);
    };
    let with_comment = format!("{base}\n{comment}");
    if with_comment.chars().count() <= config.max_text_chars {
        Ok(with_comment)
    } else {
        Ok(base)
    }
}

/// Builds the share-intent URL carrying the rendered text.
///
/// # Errors
///
/// Returns [`ShareError`] when rendering fails or the configured endpoint
/// does not parse.
pub fn share_url(task: &Task, config: &ShareConfig) -> Result<Url, ShareError> {
    let text = share_text(task, config)?;
    Url::parse_with_params(&config.intent_base_url, &[("text", text)])
        .map_err(|error| ShareError::InvalidUrl(error.to_string()))
}

fn display_title(raw: &str, config: &ShareConfig) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return config.untitled_placeholder.clone();
    }
    if trimmed.chars().count() > config.max_title_chars {
        let truncated: String = trimmed.chars().take(config.max_title_chars).collect();
        return format!("{truncated}...");
    }
    trimmed.to_owned()
}
