//! Settings for share text rendering.

/// Default share-intent endpoint.
pub const DEFAULT_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Default template for the share text.
///
/// Receives `title` and `status`; the completion comment is appended
/// outside the template so it can be dropped when the text runs long.
pub const DEFAULT_TEMPLATE: &str = "Task: {{ title }} - Status: {{ status }}";

/// Share text and URL settings.
///
/// # Examples
///
/// ```
/// use tasklane::task::share::ShareConfig;
///
/// let config = ShareConfig::default();
/// assert_eq!(config.max_text_chars, 280);
/// assert_eq!(config.max_title_chars, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    /// Endpoint receiving the `text` query parameter.
    pub intent_base_url: String,
    /// `minijinja` template for the base text.
    pub template: String,
    /// Character budget of the full share text.
    pub max_text_chars: usize,
    /// Titles longer than this are truncated with `...`.
    pub max_title_chars: usize,
    /// Shown in place of a blank title.
    pub untitled_placeholder: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            intent_base_url: DEFAULT_INTENT_URL.to_owned(),
            template: DEFAULT_TEMPLATE.to_owned(),
            max_text_chars: 280,
            max_title_chars: 200,
            untitled_placeholder: "(untitled)".to_owned(),
        }
    }
}
