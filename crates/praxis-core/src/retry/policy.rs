//! Retry policy configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry policy for an operation
///
/// The policy is deliberately small: a maximum attempt count and a fixed
/// delay between failed attempts. There is no backoff curve, jitter, or
/// per-error-kind handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RetryPolicy {
    /// Maximum number of attempts, counted from 1
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay between a failed attempt and the next one, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_delay_ms() -> u64 {
    1000
}

impl RetryPolicy {
    /// Create a policy with the given attempt count and delay
    ///
    /// The delay is stored with millisecond precision.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay_ms: delay.as_millis() as u64,
        }
    }

    /// The inter-attempt delay as a `Duration`
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Set the maximum number of attempts
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the inter-attempt delay
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_ms = delay.as_millis() as u64;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_policy_builders() {
        let policy = RetryPolicy::default()
            .with_max_attempts(5)
            .with_delay(Duration::from_millis(250));
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.delay_ms, 250);
        assert_eq!(policy.delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_empty_document_deserializes_to_defaults() {
        let policy: RetryPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, RetryPolicy::default());
    }

    #[test]
    fn test_partial_document_keeps_remaining_defaults() {
        let policy: RetryPolicy = serde_json::from_str(r#"{"max-attempts": 5}"#).unwrap();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.delay_ms, 1000);
    }

    #[test]
    fn test_policy_serialization_round_trip() {
        let policy = RetryPolicy::new(4, Duration::from_millis(50));

        let json = serde_json::to_string(&policy).unwrap();
        assert!(json.contains("\"max-attempts\":4"));
        assert!(json.contains("\"delay-ms\":50"));

        let deserialized: RetryPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, policy);
    }
}
