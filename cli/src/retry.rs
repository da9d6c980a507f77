use collabgraph_core::CatalogError;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Exponential backoff for transient catalog failures.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    /// Longest server-requested wait (`Retry-After`) we are willing to sleep
    pub max_retry_after: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// Delay before retry number `retry` (1-based): doubles each time, capped.
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 4,
            initial_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_secs(8),
            max_retry_after: Duration::from_secs(60),
        }
    }
}

/// Result of a single attempt.
pub enum Attempt<T> {
    Done(T),
    /// Transient failure; `wait` overrides the computed backoff (e.g. `Retry-After`).
    Retry { reason: String, wait: Option<Duration> },
    Fail(CatalogError),
}

pub fn retry_with_backoff<T, F>(
    operation_name: &str,
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, CatalogError>
where
    F: FnMut() -> Attempt<T>,
{
    let mut retries = 0;

    loop {
        match operation() {
            Attempt::Done(value) => {
                if retries > 0 {
                    debug!(operation = operation_name, retries, "Request succeeded after retry");
                }
                return Ok(value);
            }
            Attempt::Fail(failure) => return Err(failure),
            Attempt::Retry { reason, wait } => {
                if retries >= policy.max_retries {
                    error!(
                        operation = operation_name,
                        attempts = retries + 1,
                        reason = %reason,
                        "Giving up on catalog request"
                    );
                    return Err(CatalogError::CatalogUnavailable(format!(
                        "{} failed after {} attempts: {}",
                        operation_name,
                        retries + 1,
                        reason
                    )));
                }

                if let Some(requested) = wait.filter(|w| *w > policy.max_retry_after) {
                    error!(
                        operation = operation_name,
                        requested_secs = requested.as_secs(),
                        limit_secs = policy.max_retry_after.as_secs(),
                        "Catalog asked for a longer wait than allowed"
                    );
                    return Err(CatalogError::CatalogUnavailable(format!(
                        "{} asked to retry after {}s, limit is {}s: {}",
                        operation_name,
                        requested.as_secs(),
                        policy.max_retry_after.as_secs(),
                        reason
                    )));
                }

                retries += 1;
                let delay = wait.unwrap_or_else(|| policy.backoff_for(retries));
                warn!(
                    operation = operation_name,
                    retry = retries,
                    delay_ms = delay.as_millis() as u64,
                    reason = %reason,
                    "Transient catalog failure, backing off"
                );
                std::thread::sleep(delay);
            }
        }
    }
}
