// src/github/backoff.rs
// =============================================================================
// Rate-limit wait-and-retry.
//
// When the API reports an exhausted rate limit, the right move is to sleep
// until the reset timestamp (plus a small safety margin) and try again.
// The retry loop is bounded: after RATE_LIMIT_WAIT_CAP waits the rate-limit
// error is handed back to the caller, which treats it like any other
// upstream error for that call site.
// =============================================================================

use std::future::Future;
use std::time::Duration;

use super::client::unix_now;
use super::GithubError;

/// Maximum number of rate-limit waits for a single operation.
const RATE_LIMIT_WAIT_CAP: usize = 5;

/// Safety margin added on top of the reset timestamp.
const RESET_MARGIN_SECS: u64 = 5;

/// How long to sleep before the quota at `reset` (Unix seconds) replenishes.
pub fn wait_duration(reset: u64) -> Duration {
    wait_duration_from(reset, unix_now())
}

fn wait_duration_from(reset: u64, now: u64) -> Duration {
    Duration::from_secs(reset.saturating_sub(now) + RESET_MARGIN_SECS)
}

/// Runs `op`, sleeping through rate-limit errors and retrying, up to the cap.
///
/// Any other outcome - success or a different error - is returned as-is on
/// the first occurrence.
pub async fn with_rate_limit_retry<T, F, Fut>(op: F) -> Result<T, GithubError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, GithubError>>,
{
    let mut last_reset = 0;

    for _ in 0..RATE_LIMIT_WAIT_CAP {
        match op().await {
            Err(GithubError::RateLimited { reset }) => {
                last_reset = reset;
                let wait = wait_duration(reset);
                println!(
                    "⏳ Rate limit exceeded. Waiting {} seconds until reset...",
                    wait.as_secs()
                );
                tokio::time::sleep(wait).await;
            }
            other => return other,
        }
    }

    Err(GithubError::RateLimited { reset: last_reset })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_wait_includes_margin() {
        assert_eq!(wait_duration_from(110, 100), Duration::from_secs(15));
    }

    #[test]
    fn test_wait_floors_at_zero_before_margin() {
        // Reset already in the past: only the margin remains.
        assert_eq!(wait_duration_from(50, 100), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let result = with_rate_limit_retry(|| async { Ok::<_, GithubError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_other_errors_are_not_retried() {
        let calls = AtomicUsize::new(0);
        let result: Result<(), _> = with_rate_limit_retry(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            async {
                Err(GithubError::Status {
                    status: 404,
                    url: "https://api.github.com/users/ghost".to_string(),
                })
            }
        })
        .await;

        assert!(matches!(result, Err(GithubError::Status { status: 404, .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_retries_until_cap() {
        // Reset timestamps in the past keep the sleep at the 5 second margin;
        // with a paused clock the sleeps complete instantly.
        let calls = AtomicUsize::new(0);
        let result: Result<(), _> = with_rate_limit_retry(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(GithubError::RateLimited { reset: 1 }) }
        })
        .await;

        assert!(matches!(result, Err(GithubError::RateLimited { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_one_wait() {
        let calls = AtomicUsize::new(0);
        let result = with_rate_limit_retry(|| {
            let attempt = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err(GithubError::RateLimited { reset: 1 })
                } else {
                    Ok("contents")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "contents");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
