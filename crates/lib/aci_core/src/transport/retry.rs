//! Retry executor with exponential backoff.

use std::fmt::Display;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

/// Default number of attempts per logical call (first try included).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Default backoff multiplier.
pub const DEFAULT_MULTIPLIER: Duration = Duration::from_secs(1);
/// Default lower bound on the wait between attempts.
pub const DEFAULT_MIN_WAIT: Duration = Duration::from_secs(1);
/// Default upper bound on the wait between attempts.
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(4);

/// Retry policy shared by every request a client makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Zero is treated as one.
    pub max_attempts: u32,
    pub multiplier: Duration,
    pub min_wait: Duration,
    pub max_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            multiplier: DEFAULT_MULTIPLIER,
            min_wait: DEFAULT_MIN_WAIT,
            max_wait: DEFAULT_MAX_WAIT,
        }
    }
}

impl RetryPolicy {
    /// Retry up to `max_attempts` times without sleeping between attempts.
    pub const fn without_backoff(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            multiplier: Duration::ZERO,
            min_wait: Duration::ZERO,
            max_wait: Duration::ZERO,
        }
    }

    /// Wait after the `attempt`-th failure (1-based).
    ///
    /// delay = clamp(multiplier * 2^(attempt-1), min_wait, max_wait)
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        let delay = self.multiplier.saturating_mul(2u32.saturating_pow(exponent));
        delay.min(self.max_wait).max(self.min_wait)
    }

    /// Run `op` until it succeeds, fails with an error `is_retryable` rejects,
    /// or the attempt budget is spent. The last error is returned unchanged.
    pub fn run<T, E, F, P>(&self, label: &str, mut op: F, is_retryable: P) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        P: Fn(&E) -> bool,
        E: Display,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            debug!(operation = label, attempt, max_attempts, "attempt");
            match op() {
                Ok(value) => return Ok(value),
                Err(e) if attempt < max_attempts && is_retryable(&e) => {
                    let delay = self.backoff(attempt);
                    warn!(
                        operation = label,
                        attempt,
                        max_attempts,
                        error = %e,
                        delay_ms = delay.as_millis() as u64,
                        "attempt failed, retrying"
                    );
                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }
                    attempt += 1;
                }
                Err(e) => {
                    debug!(operation = label, attempt, error = %e, "giving up");
                    return Err(e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn backoff_grows_and_is_clamped() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(1), Duration::from_secs(1));
        assert_eq!(policy.backoff(2), Duration::from_secs(2));
        assert_eq!(policy.backoff(3), Duration::from_secs(4));
        assert_eq!(policy.backoff(10), Duration::from_secs(4));
        assert_eq!(policy.backoff(u32::MAX), Duration::from_secs(4));
    }

    #[test]
    fn backoff_respects_min_wait() {
        let policy = RetryPolicy {
            max_attempts: 5,
            multiplier: Duration::from_millis(100),
            min_wait: Duration::from_millis(250),
            max_wait: Duration::from_secs(10),
        };
        assert_eq!(policy.backoff(1), Duration::from_millis(250));
        assert_eq!(policy.backoff(2), Duration::from_millis(250));
        assert_eq!(policy.backoff(3), Duration::from_millis(400));
    }

    #[test]
    fn stops_after_max_attempts_with_last_error() {
        let calls = Cell::new(0u32);
        let result: Result<(), String> = RetryPolicy::without_backoff(3).run(
            "test",
            || {
                calls.set(calls.get() + 1);
                Err(format!("failure {}", calls.get()))
            },
            |_| true,
        );
        assert_eq!(calls.get(), 3);
        assert_eq!(result, Err("failure 3".to_string()));
    }

    #[test]
    fn non_retryable_error_fails_immediately() {
        let calls = Cell::new(0u32);
        let result: Result<(), String> = RetryPolicy::without_backoff(5).run(
            "test",
            || {
                calls.set(calls.get() + 1);
                Err("bad request".to_string())
            },
            |_| false,
        );
        assert_eq!(calls.get(), 1);
        assert!(result.is_err());
    }

    #[test]
    fn succeeds_after_transient_failures() {
        let calls = Cell::new(0u32);
        let result: Result<u32, String> = RetryPolicy::without_backoff(3).run(
            "test",
            || {
                calls.set(calls.get() + 1);
                if calls.get() < 3 {
                    Err("unavailable".to_string())
                } else {
                    Ok(calls.get())
                }
            },
            |_| true,
        );
        assert_eq!(result, Ok(3));
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        let calls = Cell::new(0u32);
        let _: Result<(), String> = RetryPolicy::without_backoff(0).run(
            "test",
            || {
                calls.set(calls.get() + 1);
                Err("nope".to_string())
            },
            |_| true,
        );
        assert_eq!(calls.get(), 1);
    }
}
