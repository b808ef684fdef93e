// src/github/error.rs
// =============================================================================
// Error taxonomy for the GitHub client.
//
// The rate-limit condition is its own variant carrying the reset timestamp
// from the x-ratelimit-reset header, so callers can wait it out and retry.
// Everything else is either a non-success API status or a transport/decode
// failure, which callers log and skip.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GithubError {
    /// API rate limit exhausted; `reset` is the Unix timestamp at which the
    /// quota replenishes.
    #[error("rate limit exceeded (resets at {reset})")]
    RateLimited { reset: u64 },

    /// The API answered with a non-success status that is not a rate limit.
    #[error("GitHub API returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Transport-level failure or malformed response body.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A downloaded file was not valid UTF-8.
    #[error("file content is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}
