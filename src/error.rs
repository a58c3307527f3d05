//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Generic error: {0}")]
    Generic(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Closed set of failure modes a word lookup can surface to the user.
///
/// Every variant's `Display` text is the exact message shown on the page or
/// returned in the JSON error body, including a next-action hint.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error(
        "OpenAI API key is not configured. Please set the OPENAI_API_KEY environment variable."
    )]
    MissingCredential,

    #[error("Failed to parse the response from the AI service. Please try again.")]
    Parse,

    #[error("Invalid or missing API key. Please check your OpenAI API configuration.")]
    Auth,

    #[error("Rate limit exceeded. Please wait a moment and try again.")]
    RateLimit,

    #[error("API quota exceeded. Please try again later.")]
    Quota,

    #[error("Failed to get word definition. Please try again. ({0})")]
    Upstream(String),
}

/// Longest upstream diagnostic snippet carried in [`LookupError::Upstream`].
const MAX_SNIPPET_CHARS: usize = 100;

impl LookupError {
    /// Classify an upstream failure message into a specific error kind.
    ///
    /// Matching is substring-based on the lowercased message, in priority
    /// order: credential problems, throttling, quota exhaustion. Anything
    /// else becomes [`LookupError::Upstream`] with a truncated snippet.
    pub fn classify(detail: &str) -> Self {
        let lowered = detail.to_lowercase();
        if lowered.contains("api key") {
            LookupError::Auth
        } else if lowered.contains("rate limit") {
            LookupError::RateLimit
        } else if lowered.contains("quota") {
            LookupError::Quota
        } else {
            LookupError::Upstream(truncate_snippet(detail))
        }
    }
}

fn truncate_snippet(detail: &str) -> String {
    detail.chars().take(MAX_SNIPPET_CHARS).collect()
}
