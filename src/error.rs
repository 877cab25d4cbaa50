use std::fmt;

use thiserror::Error;

/// Everything that can abort a run. Per-event formatting problems are not
/// represented here; those degrade to fallback lines instead.
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("invalid username (empty or a dot segment)")]
    InvalidUsername,

    #[error("invalid API base URL {0}")]
    InvalidApiBase(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{kind}: GitHub API responded with {status} ({message})")]
    Api {
        status: u16,
        kind: ApiErrorKind,
        message: String,
    },

    #[error("unexpected response format: {0}")]
    MalformedResponse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    NotFound,
    Unauthorized,
    Forbidden,
    RateLimited,
    Other,
}

impl ApiErrorKind {
    /// Classifies a non-2xx response. `rate_limit_remaining` comes from the
    /// `x-ratelimit-remaining` header when the server sent one.
    pub fn classify(status: u16, rate_limit_remaining: Option<u64>, message: &str) -> Self {
        match status {
            404 => Self::NotFound,
            401 => Self::Unauthorized,
            429 => Self::RateLimited,
            403 if rate_limit_remaining == Some(0)
                || message.to_ascii_lowercase().contains("rate limit") =>
            {
                Self::RateLimited
            }
            403 => Self::Forbidden,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NotFound => "user not found",
            Self::Unauthorized => "unauthorized (check GITHUB_USER_ACTIVITY_CLI_TOKEN)",
            Self::Forbidden => "forbidden",
            Self::RateLimited => "rate limit exceeded",
            Self::Other => "request failed",
        };
        f.write_str(text)
    }
}

pub type Result<T> = std::result::Result<T, ActivityError>;
