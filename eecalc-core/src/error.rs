//! Core error types for `eecalc`.

use thiserror::Error;

/// Core error type for `eecalc` data handling.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record failed validation.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised by the weather client.
///
/// This is a closed set: callers match on it to pick the message or the
/// report shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ClientError {
    /// No API key is configured. Raised before any network attempt.
    #[error("API key not set")]
    MissingCredentials,

    /// The weather service does not know the requested location (HTTP 404).
    #[error("Location not found")]
    NotFound,

    /// Retries exhausted, transport failure, or a malformed response.
    #[error("Failed to get weather data")]
    Generic,
}
