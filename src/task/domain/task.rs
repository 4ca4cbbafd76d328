//! Task record and partial-update types.

use super::{
    TaskDomainError, TaskId, TaskStatus, validate_completion_comment, validate_title,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};

/// A single to-do item.
///
/// Field names serialize in camelCase, matching the persisted layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completion_comment: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    order: u64,
}

impl Task {
    /// Creates a not-started task at the given position.
    ///
    /// The title is stored as given; callers trim it beforehand.
    #[must_use]
    pub fn new(title: impl Into<String>, order: u64, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: title.into(),
            status: TaskStatus::NotStarted,
            completion_comment: None,
            created_at: timestamp,
            updated_at: timestamp,
            order,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the completion comment, if any.
    ///
    /// A comment is kept when the task leaves the completed status.
    #[must_use]
    pub fn completion_comment(&self) -> Option<&str> {
        self.completion_comment.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the ordering position.
    #[must_use]
    pub const fn order(&self) -> u64 {
        self.order
    }

    /// Returns a copy with `patch` merged over this task and `updated_at`
    /// set to the current clock time.
    #[must_use]
    pub fn patched(&self, patch: &TaskPatch, clock: &impl Clock) -> Self {
        let mut next = self.clone();
        if let Some(title) = &patch.title {
            next.title.clone_from(title);
        }
        if let Some(status) = patch.status {
            next.status = status;
        }
        if let Some(comment) = &patch.completion_comment {
            next.completion_comment.clone_from(comment);
        }
        if let Some(order) = patch.order {
            next.order = order;
        }
        next.updated_at = clock.utc();
        next
    }

    /// Returns a copy placed at `order`. Repositioning is not a content
    /// mutation, so `updated_at` is kept.
    #[must_use]
    pub fn reordered(&self, order: u64) -> Self {
        Self {
            order,
            ..self.clone()
        }
    }

    /// Checks the record against the field limits.
    ///
    /// # Errors
    ///
    /// Returns the first [`TaskDomainError`] found in the title or
    /// completion comment.
    pub fn validate(&self) -> Result<(), TaskDomainError> {
        validate_title(&self.title)?;
        if let Some(comment) = &self.completion_comment {
            validate_completion_comment(comment)?;
        }
        Ok(())
    }
}

/// Partial update merged over an existing task.
///
/// `id` and `created_at` are not patchable. `completion_comment` uses a
/// nested option so a patch can clear the comment (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    /// Replacement title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Replacement or cleared completion comment.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub completion_comment: Option<Option<String>>,
    /// Replacement ordering position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u64>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the completion comment.
    #[must_use]
    pub fn with_completion_comment(mut self, comment: impl Into<String>) -> Self {
        self.completion_comment = Some(Some(comment.into()));
        self
    }

    /// Clears the completion comment.
    #[must_use]
    pub fn clearing_completion_comment(mut self) -> Self {
        self.completion_comment = Some(None);
        self
    }

    /// Sets the ordering position.
    #[must_use]
    pub fn with_order(mut self, order: u64) -> Self {
        self.order = Some(order);
        self
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.status.is_none()
            && self.completion_comment.is_none()
            && self.order.is_none()
    }
}

/// Maps a present field (including `null`) to `Some`, leaving absent fields
/// to `#[serde(default)]`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
