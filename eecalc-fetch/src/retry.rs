//! Retry strategy for weather requests.

use std::time::Duration;

use reqwest::StatusCode;

use crate::error::FetchError;

/// Status codes that are retried.
///
/// 418 is part of the retryable set by policy, alongside the usual
/// throttling and gateway statuses.
pub const RETRYABLE_STATUSES: [u16; 6] = [429, 500, 502, 503, 504, 418];

/// Strategy for retrying failed requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryStrategy {
    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Upper bound for a single delay.
    pub max_delay: Duration,
    /// Status codes treated as transient.
    pub retryable_statuses: Vec<u16>,
}

impl RetryStrategy {
    /// Creates a new retry strategy.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(30),
            retryable_statuses: RETRYABLE_STATUSES.to_vec(),
        }
    }

    /// Sets the base delay.
    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = delay;
        self
    }

    /// Calculates the delay to wait after a failed attempt (1-based).
    ///
    /// With the defaults: 100ms, 200ms, 400ms, 800ms, ...
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }

    /// Returns true if the status code is transient.
    pub fn is_retryable_status(&self, status: StatusCode) -> bool {
        self.retryable_statuses.contains(&status.as_u16())
    }

    /// Determines if an error should be retried.
    ///
    /// Only transient HTTP statuses are retried. Transport failures, 404s,
    /// and malformed responses are terminal.
    pub fn should_retry(&self, error: &FetchError) -> bool {
        error
            .status()
            .is_some_and(|status| self.is_retryable_status(status))
    }

    /// Returns true if another attempt is allowed after `attempt` attempts.
    pub fn has_attempts_left(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryStrategy {
    fn default() -> Self {
        Self::new(5)
    }
}
