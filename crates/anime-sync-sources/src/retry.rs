use crate::error::SourceError;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Bounded exponential backoff for rate-limited requests. Injected into the
/// transport client so tests can substitute a zero-delay policy.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    /// AniList allows ~90 requests per minute; 1.2 s doubling up to six
    /// attempts rides out a full rate-limit window.
    fn default() -> Self {
        Self {
            max_attempts: 6,
            base_delay: Duration::from_millis(1200),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// Delay before re-issuing the request after `attempt` failures:
    /// `base_delay * multiplier^attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = self.multiplier.powi(attempt as i32);
        Duration::from_millis((self.base_delay.as_millis() as f64 * factor) as u64)
    }

    /// Zero-delay variant for tests.
    pub fn immediate() -> Self {
        Self {
            base_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Drive `op` until it succeeds, fails terminally, or exhausts the policy's
/// attempt cap on rate-limit signals. Only rate-limit errors are retried;
/// everything else surfaces immediately.
pub async fn run_with_backoff<T, F, Fut>(
    policy: &RetryPolicy,
    mut op: F,
) -> Result<T, SourceError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SourceError>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Err(err) if err.is_rate_limit() => {
                attempt += 1;
                if attempt >= policy.max_attempts {
                    return Err(SourceError::RateLimited {
                        attempts: policy.max_attempts,
                    });
                }
                let delay = policy.delay_for(attempt - 1);
                warn!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "rate limited, backing off"
                );
                tokio::time::sleep(delay).await;
            }
            other => return other,
        }
    }
}
