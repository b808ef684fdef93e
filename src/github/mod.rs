// src/github/mod.rs
// =============================================================================
// This module is the client for the upstream GitHub REST API.
//
// Submodules:
// - client: HTTP client for account lookup, repository enumeration,
//   directory listings, and raw file downloads
// - models: serde models for the API responses we consume
// - error: typed error taxonomy, including the distinguishable
//   rate-limit condition with its reset timestamp
// - backoff: wait-and-retry handling for rate-limit errors
// =============================================================================

mod backoff;
mod client;
mod error;
mod models;

pub use backoff::{wait_duration, with_rate_limit_retry};
pub use client::GithubClient;
pub use error::GithubError;
pub use models::{Account, ContentEntry, RepositoryContext};
