// src/checker/http.rs
// =============================================================================
// This module checks whether a URL is alive by making HTTP requests.
//
// Key functionality:
// - HEAD request first (lightweight, no body download)
// - Falls back to GET when the server rejects HEAD with 405 or 403
// - Follows redirects; only a terminal 200 counts as valid
// - Transport failures (timeout, connection error, DNS) consume one attempt
//   out of a fixed budget; exhausting the budget reports no status at all
//
// Checks run one at a time - the caller awaits each probe before issuing
// the next, so at most one request is ever in flight.
// =============================================================================

use std::time::Duration;

use reqwest::Client;

/// Attempts per URL before giving up.
pub const DEFAULT_RETRIES: u32 = 2;

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum redirects followed before a probe fails.
const MAX_REDIRECTS: usize = 5;

/// The classification of a single URL after checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Terminal HTTP status, or None when every attempt failed at the
    /// transport level.
    pub status: Option<u16>,
    /// True only for HTTP 200 after following redirects.
    pub valid: bool,
}

/// Validates URLs over HTTP with a fixed attempt budget.
pub struct LinkChecker {
    client: Client,
    retries: u32,
}

impl LinkChecker {
    pub fn new(retries: u32) -> Result<Self, reqwest::Error> {
        // One client for all probes (connection pooling).
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self {
            client,
            retries: retries.max(1),
        })
    }

    /// Checks a single URL, retrying transport failures up to the budget.
    ///
    /// A response - any response - ends the retry loop: the status code is
    /// recorded and validity is decided strictly by `status == 200`. There is
    /// no delay between attempts.
    pub async fn check(&self, url: &str) -> CheckOutcome {
        for _attempt in 0..self.retries {
            match self.probe(url).await {
                Ok(status) => {
                    return CheckOutcome {
                        status: Some(status),
                        valid: status == 200,
                    };
                }
                Err(_) => continue,
            }
        }

        CheckOutcome {
            status: None,
            valid: false,
        }
    }

    // HEAD first; 405/403 usually mean the server dislikes HEAD rather than
    // that the resource is missing, so retry those with a full GET.
    async fn probe(&self, url: &str) -> Result<u16, reqwest::Error> {
        let response = self.client.head(url).send().await?;
        let status = response.status().as_u16();

        if status == 405 || status == 403 {
            let response = self.client.get(url).send().await?;
            return Ok(response.status().as_u16());
        }

        Ok(status)
    }
}
