//! Error types for the collection layer.
//!
//! Scoring itself is total and never fails; everything that can go wrong
//! happens while talking to the GitHub API.

use thiserror::Error;

/// Errors surfaced while collecting activity from the GitHub API.
///
/// Each HTTP failure the API is known to produce maps to exactly one variant
/// with one user-facing message. Collection stops at the first error; scoring
/// is never run on a failed collection.
#[derive(Debug, Error)]
pub enum CollectError {
    /// 401: the supplied token was rejected.
    #[error("authentication failed (401): the GitHub token was rejected, check its value")]
    Unauthorized,
    /// 403: the API rate limit was exhausted.
    #[error(
        "request failed (403): the GitHub API rate limit was reached; \
         unauthenticated clients get 60 requests per hour, pass --token \
         (or set GITHUB_TOKEN) to raise the limit"
    )]
    RateLimited,
    /// 404: the repository does not exist.
    #[error("request failed (404): the repository does not exist")]
    NotFound,
    /// 422: validation failed or the endpoint was spam-flagged.
    #[error("request failed (422): unprocessable content; validation failed or the endpoint was spam-flagged")]
    Unprocessable,
    /// 500: GitHub internal server error.
    #[error("request failed (500): GitHub internal server error")]
    ServerError,
    /// 503: GitHub is temporarily unavailable.
    #[error("request failed (503): service unavailable")]
    ServiceUnavailable,
    /// Any other non-success status.
    #[error("request failed ({0}): unexpected status code")]
    UnexpectedStatus(u16),
    /// Transport-level failure after the bounded retries were exhausted.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl CollectError {
    /// Map an HTTP status code to its collection error, or `None` for
    /// success.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(Self::Unauthorized),
            403 => Some(Self::RateLimited),
            404 => Some(Self::NotFound),
            422 => Some(Self::Unprocessable),
            500 => Some(Self::ServerError),
            503 => Some(Self::ServiceUnavailable),
            other => Some(Self::UnexpectedStatus(other)),
        }
    }
}
