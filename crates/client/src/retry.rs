//! Bounded retry with exponential backoff.

use std::time::Duration;

/// Retry policy for a single remote call.
///
/// Attempts are numbered 1..=max. The cap is deliberately small: the
/// job is already a long-running scheduled batch, and unbounded retry
/// would mask systemic failures instead of surfacing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Delay before the retry that follows failed attempt `attempt`
    /// (1-based): `base * 2^attempt`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }

    /// Whether another attempt is allowed after `attempt` failed.
    pub fn has_next(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}
