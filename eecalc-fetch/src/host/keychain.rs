//! Weather API key storage in the operating system's credential store.
//!
//! Secrets are kept under a single service name and addressed by account.
//! The backend is picked by `keyring`: Keychain Services on macOS, Credential
//! Manager on Windows and the Secret Service on Linux.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::error::KeychainError;

/// Service name all eecalc secrets are filed under.
pub const SERVICE: &str = "eecalc";

/// Account holding the weather data API key.
pub const WEATHER_API_KEY_ACCOUNT: &str = "weather-data-api-key";

// ============================================================================
// Secret Store Trait
// ============================================================================

/// Storage for secrets addressed by account name.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Reads a secret. Missing and blank secrets are both `Ok(None)`.
    async fn read(&self, account: &str) -> Result<Option<String>, KeychainError>;

    /// Writes a secret, replacing any existing value.
    async fn write(&self, account: &str, secret: &str) -> Result<(), KeychainError>;

    /// Removes a secret. Returns `false` if there was nothing stored.
    async fn remove(&self, account: &str) -> Result<bool, KeychainError>;
}

/// Treats a blank stored value as absent.
fn non_blank(secret: String) -> Option<String> {
    (!secret.trim().is_empty()).then_some(secret)
}

// ============================================================================
// System Keychain
// ============================================================================

/// [`SecretStore`] backed by the platform credential store.
#[derive(Debug, Clone)]
pub struct SystemKeychain {
    service: String,
}

impl SystemKeychain {
    /// Keychain scoped to the eecalc service.
    pub fn new() -> Self {
        Self {
            service: SERVICE.to_string(),
        }
    }

    fn entry(&self, account: &str) -> Result<Entry, KeychainError> {
        Entry::new(&self.service, account).map_err(|e| {
            warn!(service = %self.service, account, error = %e, "Cannot open keychain entry");
            KeychainError::from(e)
        })
    }
}

impl Default for SystemKeychain {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecretStore for SystemKeychain {
    async fn read(&self, account: &str) -> Result<Option<String>, KeychainError> {
        let secret = match self.entry(account)?.get_password() {
            Ok(secret) => non_blank(secret),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                warn!(account, error = %e, "Keychain read failed");
                return Err(e.into());
            }
        };

        debug!(account, present = secret.is_some(), "Keychain read");
        Ok(secret)
    }

    async fn write(&self, account: &str, secret: &str) -> Result<(), KeychainError> {
        self.entry(account)?.set_password(secret).map_err(|e| {
            warn!(account, error = %e, "Keychain write failed");
            KeychainError::from(e)
        })?;

        debug!(account, "Keychain write");
        Ok(())
    }

    async fn remove(&self, account: &str) -> Result<bool, KeychainError> {
        let removed = match self.entry(account)?.delete_credential() {
            Ok(()) => true,
            Err(keyring::Error::NoEntry) => false,
            Err(e) => {
                warn!(account, error = %e, "Keychain remove failed");
                return Err(e.into());
            }
        };

        debug!(account, removed, "Keychain remove");
        Ok(removed)
    }
}
