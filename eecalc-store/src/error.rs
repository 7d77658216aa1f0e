//! Store error types.

use eecalc_core::CoreError;
use eecalc_fetch::KeychainError;
use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A reference dataset contains an invalid record.
    #[error("Invalid reference data: {0}")]
    InvalidData(#[from] CoreError),

    /// Credential storage failed.
    #[error("Keychain error: {0}")]
    Keychain(#[from] KeychainError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Returns true if the error means a file was simply missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let missing = StoreError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(missing.is_not_found());

        let denied = StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "nope",
        ));
        assert!(!denied.is_not_found());
        assert!(!StoreError::Config("bad".into()).is_not_found());
    }
}
