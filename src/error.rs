use chrono::{DateTime, Local};
use reqwest::StatusCode;
use thiserror::Error;

/// Ways a repository search can fail. None of them are fatal; the caller
/// degrades every one of them to an empty result page.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The response body was not JSON at all.
    #[error("failed to parse response from GitHub API: {0}")]
    Parse(#[source] serde_json::Error),

    /// The body was JSON but not a search result object.
    #[error("unexpected response from GitHub API: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("GitHub API returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("GitHub API rate limit exceeded, resets at {}", .reset.format("%H:%M:%S"))]
    RateLimited { reset: DateTime<Local> },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl SearchError {
    pub fn is_parse_error(&self) -> bool {
        matches!(self, SearchError::Parse(_))
    }
}
