use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Exponential backoff policy for startup connection attempts
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub backoff_multiplier: f64,
    /// Scale each delay into 50-100% of its nominal value
    pub use_jitter: bool,
}

impl RetryConfig {
    /// Defaults: 3 retries, 100ms initial delay doubling up to 5s, with jitter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_delay(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_max_delay(mut self, delay_ms: u64) -> Self {
        self.max_delay_ms = delay_ms;
        self
    }

    pub fn without_jitter(mut self) -> Self {
        self.use_jitter = false;
        self
    }

    fn next_delay(&self, current_ms: u64) -> u64 {
        ((current_ms as f64 * self.backoff_multiplier) as u64).min(self.max_delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
            use_jitter: true,
        }
    }
}

/// Runs `operation` until it succeeds or `config.max_retries` retries are spent.
///
/// The error of the final attempt is returned unchanged.
///
/// ```ignore
/// let db = retry_with_backoff(|| sql::connect(&url), RetryConfig::new().with_max_retries(5)).await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0;
    let mut delay_ms = config.initial_delay_ms;

    loop {
        let err = match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    debug!(retries = attempt, "Operation succeeded after retrying");
                }
                return Ok(value);
            }
            Err(err) => err,
        };

        attempt += 1;
        if attempt > config.max_retries {
            warn!(attempts = attempt, error = %err, "Giving up after repeated failures");
            return Err(err);
        }

        let wait_ms = if config.use_jitter {
            apply_jitter(delay_ms)
        } else {
            delay_ms
        };

        debug!(
            attempt,
            max_retries = config.max_retries,
            wait_ms,
            error = %err,
            "Operation failed, retrying"
        );

        tokio::time::sleep(Duration::from_millis(wait_ms)).await;
        delay_ms = config.next_delay(delay_ms);
    }
}

/// [`retry_with_backoff`] with [`RetryConfig::default`].
pub async fn retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    retry_with_backoff(operation, RetryConfig::default()).await
}

fn apply_jitter(delay_ms: u64) -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let percent = RandomState::new().hash_one(std::time::SystemTime::now()) % 51;
    delay_ms * (50 + percent) / 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast() -> RetryConfig {
        RetryConfig::new().with_initial_delay(5).without_jitter()
    }

    #[tokio::test]
    async fn test_retry_success_first_attempt() {
        let calls = Arc::new(AtomicU32::new(0));

        let result = retry(|| {
            let calls = calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, String>("connected")
            }
        })
        .await;

        assert_eq!(result.unwrap(), "connected");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retry_recovers_after_failures() {
        let calls = Arc::new(AtomicU32::new(0));

        let result = retry_with_backoff(
            || {
                let calls = calls.clone();
                async move {
                    let n = calls.fetch_add(1, Ordering::SeqCst);
                    if n < 2 { Err(format!("attempt {n} refused")) } else { Ok(n) }
                }
            },
            fast(),
        )
        .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_returns_last_error_when_exhausted() {
        let calls = Arc::new(AtomicU32::new(0));

        let result = retry_with_backoff(
            || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>("database unreachable")
                }
            },
            fast().with_max_retries(2),
        )
        .await;

        assert_eq!(result.unwrap_err(), "database unreachable");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_next_delay_is_capped() {
        let config = RetryConfig::new().with_initial_delay(1000).with_max_delay(3000);
        assert_eq!(config.next_delay(1000), 2000);
        assert_eq!(config.next_delay(2000), 3000);
        assert_eq!(config.next_delay(3000), 3000);
    }

    #[test]
    fn test_apply_jitter_bounds() {
        for _ in 0..20 {
            let jittered = apply_jitter(1000);
            assert!((500..=1000).contains(&jittered));
        }
    }
}
