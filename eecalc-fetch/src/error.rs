//! Fetch error types.

use eecalc_core::ClientError;
use reqwest::StatusCode;
use thiserror::Error;

// ============================================================================
// Main Fetch Error
// ============================================================================

/// Error type for weather fetch operations.
///
/// This is the detailed, diagnostic error. Callers outside this crate see
/// the coarser [`ClientError`] produced by [`FetchError::classify`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// No API key configured.
    #[error("API key not set")]
    MissingCredentials,

    /// The API key cannot be sent as a header value.
    #[error("API key contains characters that are not valid in a header")]
    InvalidCredentials,

    /// Transport failure before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The service answered with a non-success status.
    #[error("Unexpected status code: {0}")]
    Status(StatusCode),

    /// The response body did not have the expected shape or values.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// Maps this error onto the client error taxonomy.
    ///
    /// A missing credential stays distinct, a 404 means the location is
    /// unknown, and everything else is a generic failure.
    pub fn classify(&self) -> ClientError {
        match self {
            Self::MissingCredentials => ClientError::MissingCredentials,
            Self::Status(StatusCode::NOT_FOUND) => ClientError::NotFound,
            _ => ClientError::Generic,
        }
    }

    /// Returns the HTTP status if the service responded.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<FetchError> for ClientError {
    fn from(err: FetchError) -> Self {
        err.classify()
    }
}

// ============================================================================
// HTTP Error
// ============================================================================

/// HTTP transport error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request error.
    #[error("Request error: {0}")]
    Request(reqwest::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Timeout.
    #[error("Request timed out")]
    Timeout,

    /// Connection could not be established.
    #[error("Connection failed: {0}")]
    Connection(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else if err.is_connect() {
            HttpError::Connection(err.to_string())
        } else {
            HttpError::Request(err)
        }
    }
}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        FetchError::Http(HttpError::InvalidUrl(err.to_string()))
    }
}

// ============================================================================
// Keychain Error
// ============================================================================

/// Error type for keychain operations.
#[derive(Debug, Error)]
pub enum KeychainError {
    /// Access denied.
    #[error("Access denied to keychain")]
    AccessDenied,

    /// Platform error.
    #[error("Platform error: {0}")]
    Platform(String),

    /// Generic error.
    #[error("Keychain error: {0}")]
    Other(String),
}

impl From<keyring::Error> for KeychainError {
    fn from(err: keyring::Error) -> Self {
        match err {
            keyring::Error::Ambiguous(_) => {
                KeychainError::Other("Ambiguous credential entry".to_string())
            }
            keyring::Error::PlatformFailure(e) => KeychainError::Platform(e.to_string()),
            keyring::Error::NoStorageAccess(_) => KeychainError::AccessDenied,
            _ => KeychainError::Other(err.to_string()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
