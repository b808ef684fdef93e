// src/github/client.rs
// =============================================================================
// HTTP client for the GitHub REST API.
//
// Operations:
// - get_user: resolve the target account
// - list_repos: enumerate every repository the account owns (paginated)
// - list_contents: list one directory of a repository's file tree
// - fetch_raw: download a file's raw content (UTF-8)
//
// A 403 whose x-ratelimit-remaining header is "0" is surfaced as
// GithubError::RateLimited with the reset timestamp, so callers can wait
// and retry; any other non-success status becomes GithubError::Status.
// =============================================================================

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder, Response, StatusCode};

use super::{Account, ContentEntry, GithubError, RepositoryContext};

const GITHUB_API: &str = "https://api.github.com";
const PER_PAGE: usize = 100;
const API_TIMEOUT: Duration = Duration::from_secs(30);

/// Fallback reset horizon when a rate-limit response omits the header:
/// one full quota window from now.
const DEFAULT_RESET_HORIZON_SECS: u64 = 3600;

pub struct GithubClient {
    http: Client,
    token: Option<String>,
    base: String,
}

impl GithubClient {
    pub fn new(token: Option<&str>) -> Result<Self, GithubError> {
        let http = Client::builder()
            .user_agent(concat!("repo-link-audit/", env!("CARGO_PKG_VERSION")))
            .timeout(API_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            token: token.map(str::to_string),
            base: GITHUB_API.to_string(),
        })
    }

    /// Points the client at a different API base. Tests use this to run
    /// against a local stub server.
    #[cfg(test)]
    pub fn with_base_url(mut self, base: &str) -> Self {
        self.base = base.trim_end_matches('/').to_string();
        self
    }

    /// Resolves the account that owns the repositories to scan.
    pub async fn get_user(&self, username: &str) -> Result<Account, GithubError> {
        let url = format!("{}/users/{}", self.base, username);
        let response = self.send(url).await?;
        Ok(response.json().await?)
    }

    /// Enumerates every repository owned by `username`.
    ///
    /// The listing endpoint is paginated; pages are fetched until a short
    /// page signals the end.
    pub async fn list_repos(&self, username: &str) -> Result<Vec<RepositoryContext>, GithubError> {
        let mut repos = Vec::new();
        let mut page = 1usize;

        loop {
            let url = format!(
                "{}/users/{}/repos?per_page={}&page={}",
                self.base, username, PER_PAGE, page
            );
            let response = self.send(url).await?;
            let batch: Vec<RepositoryContext> = response.json().await?;
            let len = batch.len();
            repos.extend(batch);

            if len < PER_PAGE {
                return Ok(repos);
            }
            page += 1;
        }
    }

    /// Lists one directory of a repository's tree. `path` is relative to the
    /// repository root; the empty string lists the root itself.
    pub async fn list_contents(
        &self,
        full_name: &str,
        path: &str,
    ) -> Result<Vec<ContentEntry>, GithubError> {
        let url = format!("{}/repos/{}/contents/{}", self.base, full_name, path);
        let response = self.send(url).await?;
        Ok(response.json().await?)
    }

    /// Downloads a file's raw content and decodes it as UTF-8.
    pub async fn fetch_raw(&self, download_url: &str) -> Result<String, GithubError> {
        let response = self.send(download_url.to_string()).await?;
        let bytes = response.bytes().await?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let mut request = self
            .http
            .get(url)
            .header("accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn send(&self, url: String) -> Result<Response, GithubError> {
        let response = self.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::FORBIDDEN && is_rate_limited(response.headers()) {
            return Err(GithubError::RateLimited {
                reset: reset_timestamp(response.headers()),
            });
        }
        if !status.is_success() {
            return Err(GithubError::Status {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response)
    }
}

fn is_rate_limited(headers: &HeaderMap) -> bool {
    headers
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "0")
        .unwrap_or(false)
}

fn reset_timestamp(headers: &HeaderMap) -> u64 {
    headers
        .get("x-ratelimit-reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| unix_now() + DEFAULT_RESET_HORIZON_SECS)
}

pub(crate) fn unix_now() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}
