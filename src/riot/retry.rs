//! Retry budget shared by transport failures and upstream 429s.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

/// What one network attempt produced, as far as retrying is concerned.
#[derive(Debug)]
pub enum AttemptOutcome<T, E> {
    /// Any answer that ends the loop, successful or not
    Done(T),
    /// Upstream 429, with its `Retry-After` if one was usable
    RateLimited(Option<Duration>),
    /// Transport failure
    Failed(E),
}

/// Why [`RetryPolicy::run`] gave up.
#[derive(Debug)]
pub enum RetryExhausted<E> {
    RateLimited {
        attempts: u32,
        retry_after: Option<Duration>,
    },
    Failed {
        attempts: u32,
        error: E,
    },
}

// == Retry Policy ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total network attempts per call, whatever the failure cause
    pub max_attempts: u32,
    /// Wait after a 429 that carries no usable `Retry-After`
    pub rate_limit_wait: Duration,
    /// Linear backoff unit after a transport failure; attempt `n` waits `n` units
    pub transport_backoff: Duration,
}

impl RetryPolicy {
    /// Wait after the `attempt`-th (1-based) transport failure.
    pub fn transport_delay(&self, attempt: u32) -> Duration {
        self.transport_backoff * attempt
    }

    /// Wait after a 429, honoring `Retry-After` when present.
    pub fn rate_limit_delay(&self, retry_after: Option<Duration>) -> Duration {
        retry_after.unwrap_or(self.rate_limit_wait)
    }

    /// Calls `attempt_fn` with the 1-based attempt number until it returns
    /// [`AttemptOutcome::Done`] or `max_attempts` calls have been made.
    ///
    /// Waits happen only between attempts; a failing final attempt returns at once.
    /// On success, returns the value together with the number of attempts made.
    pub async fn run<T, E, F, Fut>(&self, mut attempt_fn: F) -> Result<(T, u32), RetryExhausted<E>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = AttemptOutcome<T, E>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let delay = match attempt_fn(attempt).await {
                AttemptOutcome::Done(value) => return Ok((value, attempt)),
                AttemptOutcome::RateLimited(retry_after) => {
                    if attempt >= max_attempts {
                        return Err(RetryExhausted::RateLimited {
                            attempts: attempt,
                            retry_after,
                        });
                    }
                    self.rate_limit_delay(retry_after)
                }
                AttemptOutcome::Failed(error) => {
                    if attempt >= max_attempts {
                        return Err(RetryExhausted::Failed {
                            attempts: attempt,
                            error,
                        });
                    }
                    self.transport_delay(attempt)
                }
            };
            debug!(attempt, ?delay, "Waiting before next attempt");
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            rate_limit_wait: Duration::from_secs(1),
            transport_backoff: Duration::from_secs(1),
        }
    }
}

/// Parses a `Retry-After` header given in whole seconds.
///
/// HTTP-date values are not sent by this upstream and are treated as absent.
pub fn parse_retry_after(header_value: Option<&str>) -> Option<Duration> {
    header_value?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
