//! Social sharing helpers.
//!
//! Pure formatting for the presentation layer; the store never calls into
//! this module.

mod config;
mod text;

pub use config::{DEFAULT_INTENT_URL, DEFAULT_TEMPLATE, ShareConfig};
pub use text::{ShareError, share_text, share_url, status_label};
