use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Case-sensitive fragments that mark a failure as worth another attempt.
pub const TRANSIENT_ERROR_MARKERS: [&str; 4] =
    ["ECONNRESET", "Connection error", "network", "timeout"];

/// Bounded retry with a constant delay between attempts.
///
/// A budget of `n` allows at most `n + 1` attempts. Only failures whose message
/// contains one of [`TRANSIENT_ERROR_MARKERS`] are retried; anything else is
/// returned to the caller untouched on the first occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_transient(message: &str) -> bool {
        TRANSIENT_ERROR_MARKERS
            .iter()
            .any(|marker| message.contains(marker))
    }

    pub async fn run<F, Fut, T, E>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut retries_left = self.max_retries;

        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if retries_left > 0 && Self::is_transient(&e.to_string()) => {
                    retries_left -= 1;
                    warn!(
                        error = %e,
                        retries_left,
                        delay_ms = self.delay.as_millis(),
                        "Transient failure, retrying operation"
                    );
                    tokio::time::sleep(self.delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY)
    }
}
