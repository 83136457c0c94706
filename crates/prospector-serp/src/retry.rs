//! Retry with exponential back-off and jitter for the `SerpAPI` client.
//!
//! Every retry spends a paid search, so [`RetryPolicy::NONE`] is the default
//! and retries only happen when the operator raises `max_retries`.

use std::future::Future;
use std::time::Duration;

use crate::error::SerpError;

/// How often and how patiently to retry a transient failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further attempt.
    pub backoff_base_ms: u64,
    /// Upper bound on any single delay, applied after jitter.
    pub max_delay_ms: u64,
}

impl RetryPolicy {
    /// A single attempt, no retries.
    pub const NONE: Self = Self {
        max_retries: 0,
        backoff_base_ms: 1_000,
        max_delay_ms: 60_000,
    };

    /// Delay before retry number `attempt` (1-based), scaled by `jitter`.
    fn delay_for(&self, attempt: u32, jitter: f64) -> Duration {
        let doublings = attempt.saturating_sub(1).min(20);
        let base = self.backoff_base_ms.saturating_mul(1u64 << doublings);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let jittered = (base as f64 * jitter) as u64;
        Duration::from_millis(jittered.min(self.max_delay_ms))
    }
}

/// Returns `true` for errors that are worth retrying after a back-off delay:
/// timeouts, connect failures, HTTP 429 and HTTP 5xx.
///
/// Other 4xx statuses (bad key, exhausted plan), API-level errors, malformed
/// bodies and configuration errors fail straight away.
pub(crate) fn is_retriable(err: &SerpError) -> bool {
    match err {
        SerpError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        SerpError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        SerpError::ApiError(_)
        | SerpError::Deserialize { .. }
        | SerpError::InvalidBaseUrl { .. } => false,
    }
}

/// Runs `operation`, retrying transient errors as `policy` allows.
///
/// Each delay is the policy's back-off for that attempt times a random
/// factor in `0.75..1.25`.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    policy: RetryPolicy,
    mut operation: F,
) -> Result<T, SerpError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SerpError>>,
{
    let mut attempt = 0u32;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if attempt >= policy.max_retries || !is_retriable(&err) {
            return Err(err);
        }
        attempt += 1;
        let delay = policy.delay_for(attempt, rand::random::<f64>() * 0.5 + 0.75);
        tracing::warn!(
            attempt,
            max_retries = policy.max_retries,
            ?delay,
            error = %err,
            "transient SerpAPI failure, retrying"
        );
        tokio::time::sleep(delay).await;
    }
}
