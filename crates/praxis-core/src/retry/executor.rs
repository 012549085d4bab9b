//! Retry execution engine
//!
//! This module provides the core retry execution logic. Execution is
//! synchronous: the inter-attempt delay is a plain blocking sleep on the
//! calling thread.

use std::fmt::Display;
use std::thread;

use super::observer::{NoOpObserver, RetryObserver};
use super::policy::RetryPolicy;

/// Execute an operation with retry logic based on a policy
///
/// This is a convenience function for simple retry scenarios. For control
/// over observation, build a `RetryExecutor`.
///
/// # Arguments
///
/// * `policy` - The retry policy to use
/// * `op` - A closure performing the fallible operation
///
/// # Returns
///
/// The result of the first successful attempt, or the error from the final
/// attempt, unchanged.
///
/// # Example
///
/// ```rust
/// use praxis_core::retry::{retry_with_policy, RetryPolicy};
///
/// let policy = RetryPolicy::default().with_delay(std::time::Duration::ZERO);
///
/// let result = retry_with_policy(&policy, || {
///     // Simulated operation that might fail
///     Ok::<_, std::io::Error>("success")
/// });
/// assert!(result.is_ok());
/// ```
pub fn retry_with_policy<F, T, E>(policy: &RetryPolicy, op: F) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: Display,
{
    RetryExecutor::new(policy.clone()).execute(op)
}

/// A retry executor with a configurable policy and observer
///
/// Wraps a zero-argument fallible operation and invokes it up to
/// `policy.max_attempts` times, sleeping `policy.delay()` between failed
/// attempts. The observer is notified of every non-final failure and of
/// exhaustion; the final error is returned to the caller as-is.
pub struct RetryExecutor<O = NoOpObserver> {
    policy: RetryPolicy,
    observer: O,
}

impl RetryExecutor<NoOpObserver> {
    /// Create an executor with the given policy and no observation
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            observer: NoOpObserver,
        }
    }
}

impl<O> RetryExecutor<O> {
    /// Set the observer
    ///
    /// The observer receives callbacks during retry execution.
    pub fn with_observer<O2>(self, observer: O2) -> RetryExecutor<O2> {
        RetryExecutor {
            policy: self.policy,
            observer,
        }
    }

    /// Get the configured policy
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

impl<O> RetryExecutor<O>
where
    O: RetryObserver,
{
    /// Execute an operation with retry logic
    ///
    /// Attempts are counted from 1 to `max_attempts` inclusive; a
    /// `max_attempts` of 0 is treated as 1, so at least one attempt is
    /// always made. The delay applies only between attempts, never before
    /// the first or after the last.
    pub fn execute<F, T, E>(&self, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: Display,
    {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match op() {
                Ok(result) => return Ok(result),
                Err(err) => {
                    if attempt >= max_attempts {
                        self.observer.on_exhausted(attempt, &err);
                        return Err(err);
                    }

                    let delay = self.policy.delay();
                    self.observer.on_attempt_failed(attempt, &err, delay);

                    if !delay.is_zero() {
                        thread::sleep(delay);
                    }

                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::observer::StatsObserver;
    use std::cell::Cell;
    use std::io;
    use std::sync::Arc;
    use std::time::Duration;

    fn quick_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(max_attempts, Duration::ZERO)
    }

    #[test]
    fn test_immediate_success() {
        let observer = Arc::new(StatsObserver::new());
        let calls = Cell::new(0u32);

        let result: Result<&str, io::Error> = RetryExecutor::new(quick_policy(3))
            .with_observer(observer.clone())
            .execute(|| {
                calls.set(calls.get() + 1);
                Ok("success")
            });

        assert_eq!(result.unwrap(), "success");
        assert_eq!(calls.get(), 1);
        assert_eq!(observer.failures(), 0);
        assert_eq!(observer.exhaustions(), 0);
    }

    #[test]
    fn test_success_after_retries() {
        let observer = Arc::new(StatsObserver::new());
        let calls = Cell::new(0u32);

        let result: Result<&str, io::Error> = RetryExecutor::new(quick_policy(3))
            .with_observer(observer.clone())
            .execute(|| {
                calls.set(calls.get() + 1);
                if calls.get() < 3 {
                    Err(io::Error::new(io::ErrorKind::TimedOut, "timeout"))
                } else {
                    Ok("success")
                }
            });

        assert_eq!(result.unwrap(), "success");
        assert_eq!(calls.get(), 3);
        assert_eq!(observer.failures(), 2);
        assert_eq!(observer.exhaustions(), 0);
    }

    #[test]
    fn test_all_attempts_exhausted() {
        let observer = Arc::new(StatsObserver::new());
        let calls = Cell::new(0u32);

        let result: Result<&str, String> = RetryExecutor::new(quick_policy(2))
            .with_observer(observer.clone())
            .execute(|| {
                calls.set(calls.get() + 1);
                Err("boom".to_string())
            });

        // The final error surfaces unchanged
        assert_eq!(result.unwrap_err(), "boom");
        assert_eq!(calls.get(), 2);
        assert_eq!(observer.failures(), 1);
        assert_eq!(observer.exhaustions(), 1);
    }

    #[test]
    fn test_final_error_is_from_last_invocation() {
        let calls = Cell::new(0u32);

        let result: Result<(), String> = retry_with_policy(&quick_policy(3), || {
            calls.set(calls.get() + 1);
            Err(format!("failure {}", calls.get()))
        });

        assert_eq!(result.unwrap_err(), "failure 3");
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_single_attempt_no_sleep() {
        let observer = Arc::new(StatsObserver::new());
        let calls = Cell::new(0u32);

        // A 10-second delay would be visible if it ever fired
        let policy = RetryPolicy::new(1, Duration::from_secs(10));
        let start = std::time::Instant::now();

        let result: Result<&str, io::Error> = RetryExecutor::new(policy)
            .with_observer(observer.clone())
            .execute(|| {
                calls.set(calls.get() + 1);
                Err(io::Error::other("error"))
            });

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(observer.failures(), 0);
        assert_eq!(observer.exhaustions(), 1);
    }

    #[test]
    fn test_zero_max_attempts_still_attempts_once() {
        let calls = Cell::new(0u32);

        let result: Result<&str, String> = retry_with_policy(&quick_policy(0), || {
            calls.set(calls.get() + 1);
            Err("error".to_string())
        });

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_delay_applied_between_attempts() {
        let policy = RetryPolicy::new(3, Duration::from_millis(20));
        let start = std::time::Instant::now();

        let result: Result<&str, String> =
            retry_with_policy(&policy, || Err("always fails".to_string()));

        assert!(result.is_err());
        // Two inter-attempt delays of 20ms each
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_retry_with_policy_convenience() {
        let calls = Cell::new(0u32);

        let result = retry_with_policy(&quick_policy(3), || {
            calls.set(calls.get() + 1);
            if calls.get() < 2 {
                Err(io::Error::new(io::ErrorKind::TimedOut, "timeout"))
            } else {
                Ok("success")
            }
        });

        assert_eq!(result.unwrap(), "success");
        assert_eq!(calls.get(), 2);
    }
}
