//! Errors raised at the action decoding boundary.

use thiserror::Error;

/// Defects in the calling code detected while decoding actions.
///
/// These are the only errors allowed to escape the store controller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// The action carries no `type` tag.
    #[error("action is missing its type tag")]
    MissingActionTag,

    /// The action tag is not recognised.
    #[error("unknown action type: {0}")]
    UnknownAction(String),

    /// The payload does not match the action tag.
    #[error("malformed {tag} action: {reason}")]
    MalformedAction {
        /// Tag of the rejected action.
        tag: String,
        /// Decoder failure description.
        reason: String,
    },
}
