//! Attempt records for retried requests.
//!
//! Every attempt, failed or not, is recorded so callers can inspect what
//! happened before the final outcome.

use std::time::Duration;

use crate::error::FetchError;

// ============================================================================
// Fetch Attempt
// ============================================================================

/// Record of a single request attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchAttempt {
    /// Attempt number, starting at 1.
    pub attempt: u32,
    /// Whether the attempt succeeded.
    pub success: bool,
    /// HTTP status if a response was received.
    pub status: Option<u16>,
    /// Error if the attempt failed.
    pub error: Option<String>,
    /// How long the attempt took.
    pub duration: Duration,
    /// Delay waited before the next attempt, if one followed.
    pub backoff: Option<Duration>,
}

impl FetchAttempt {
    /// Creates a successful attempt record.
    pub fn success(attempt: u32, status: u16, duration: Duration) -> Self {
        Self {
            attempt,
            success: true,
            status: Some(status),
            error: None,
            duration,
            backoff: None,
        }
    }

    /// Creates a failed attempt record.
    pub fn failure(
        attempt: u32,
        error: &FetchError,
        duration: Duration,
        backoff: Option<Duration>,
    ) -> Self {
        Self {
            attempt,
            success: false,
            status: error.status().map(|s| s.as_u16()),
            error: Some(error.to_string()),
            duration,
            backoff,
        }
    }
}

// ============================================================================
// Fetch Outcome
// ============================================================================

/// The outcome of a request with retries.
#[derive(Debug)]
pub struct FetchOutcome<T> {
    /// The result (success or final error).
    pub result: Result<T, FetchError>,
    /// All attempts made.
    pub attempts: Vec<FetchAttempt>,
    /// Total duration including backoff.
    pub duration: Duration,
}

impl<T> FetchOutcome<T> {
    /// Returns the number of attempts made.
    pub fn attempts_count(&self) -> usize {
        self.attempts.len()
    }

    /// Returns the backoff delays that were waited, in order.
    pub fn backoffs(&self) -> Vec<Duration> {
        self.attempts.iter().filter_map(|a| a.backoff).collect()
    }

    /// Returns all errors that occurred.
    pub fn errors(&self) -> Vec<&str> {
        self.attempts
            .iter()
            .filter_map(|a| a.error.as_deref())
            .collect()
    }

    /// Maps the successful value, keeping the attempt history.
    pub fn map<U>(self, f: impl FnOnce(T) -> Result<U, FetchError>) -> FetchOutcome<U> {
        FetchOutcome {
            result: self.result.and_then(f),
            attempts: self.attempts,
            duration: self.duration,
        }
    }
}
