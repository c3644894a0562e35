//! Retry with exponential back-off and jitter for provider requests.
//!
//! [`retry_with_backoff`] wraps any fallible async operation and retries on
//! transient errors (network failures, 429, 5xx). Everything else is returned
//! immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::OsmError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:**
/// - Network-level failures: timeout, connection refused/reset.
/// - [`OsmError::RateLimited`]: the public OSM services throttle aggressively.
/// - [`OsmError::UnexpectedStatus`] with a 5xx code.
///
/// **Not retriable:** 4xx statuses, malformed payloads, invalid coordinates
/// and configuration errors.
pub(crate) fn is_retriable(err: &OsmError) -> bool {
    match err {
        OsmError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        OsmError::RateLimited { .. } => true,
        OsmError::UnexpectedStatus { status, .. } => (500..600).contains(status),
        OsmError::Deserialize { .. }
        | OsmError::MissingElements { .. }
        | OsmError::InvalidCoordinate { .. }
        | OsmError::InvalidBaseUrl { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on transient errors.
///
/// Back-off schedule with `backoff_base_ms = 500`:
///
/// | Attempt | Sleep before next attempt   |
/// |---------|-----------------------------|
/// | 1       | 500 ms × 2⁰ ± 25 % jitter   |
/// | 2       | 500 ms × 2¹ ± 25 % jitter   |
/// | 3       | 500 ms × 2² ± 25 % jitter   |
///
/// Delay is capped at 30 s, except that a [`OsmError::RateLimited`] response
/// always waits at least its `Retry-After`.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, OsmError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, OsmError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let delay_ms = delay_before_retry_ms(&err, attempt, backoff_base_ms);
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transient provider error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

/// Jittered exponential delay for retry number `attempt` (1-based), raised to
/// the server's `Retry-After` on rate limiting.
fn delay_before_retry_ms(err: &OsmError, attempt: u32, backoff_base_ms: u64) -> u64 {
    const MAX_DELAY_MS: u64 = 30_000;
    let computed = backoff_base_ms.saturating_mul(1u64 << attempt.saturating_sub(1).min(10));
    let capped = computed.min(MAX_DELAY_MS);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let jittered = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
    match err {
        OsmError::RateLimited {
            retry_after_secs, ..
        } => jittered.max(retry_after_secs.saturating_mul(1000)),
        _ => jittered,
    }
}
