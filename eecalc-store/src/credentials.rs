//! Weather API key storage.
//!
//! The key lives in the system keychain under the `eecalc` service. It is
//! read once per calculation and never written to the settings file.

use eecalc_fetch::host::keychain::WEATHER_API_KEY_ACCOUNT;
use eecalc_fetch::{SecretStore, SystemKeychain};
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::StoreError;

/// Reads and writes the weather API key.
#[derive(Clone)]
pub struct CredentialStore {
    keychain: Arc<dyn SecretStore>,
}

impl CredentialStore {
    /// Creates a store backed by the system keychain.
    pub fn system() -> Self {
        Self::new(Arc::new(SystemKeychain::new()))
    }

    /// Creates a store backed by the given keychain.
    pub fn new(keychain: Arc<dyn SecretStore>) -> Self {
        Self { keychain }
    }

    /// Returns the stored API key, if any.
    pub async fn api_key(&self) -> Result<Option<String>, StoreError> {
        let key = self.keychain.read(WEATHER_API_KEY_ACCOUNT).await?;
        debug!(found = key.is_some(), "API key lookup");
        Ok(key)
    }

    /// Stores the API key, replacing any previous one.
    ///
    /// Surrounding whitespace is trimmed. An empty key is rejected.
    pub async fn set_api_key(&self, key: &str) -> Result<(), StoreError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(StoreError::Config("API key must not be empty".into()));
        }

        self.keychain.write(WEATHER_API_KEY_ACCOUNT, key).await?;
        info!("API key stored");
        Ok(())
    }

    /// Removes the stored API key. Removing a missing key succeeds.
    pub async fn delete_api_key(&self) -> Result<(), StoreError> {
        if self.keychain.remove(WEATHER_API_KEY_ACCOUNT).await? {
            info!("API key deleted");
        } else {
            debug!("No API key to delete");
        }
        Ok(())
    }

    /// Returns true if an API key is stored.
    pub async fn has_api_key(&self) -> bool {
        matches!(self.keychain.read(WEATHER_API_KEY_ACCOUNT).await, Ok(Some(_)))
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use eecalc_fetch::KeychainError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryKeychain {
        entries: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl SecretStore for MemoryKeychain {
        async fn read(&self, account: &str) -> Result<Option<String>, KeychainError> {
            Ok(self.entries.lock().unwrap().get(account).cloned())
        }

        async fn write(&self, account: &str, secret: &str) -> Result<(), KeychainError> {
            self.entries
                .lock()
                .unwrap()
                .insert(account.to_string(), secret.to_string());
            Ok(())
        }

        async fn remove(&self, account: &str) -> Result<bool, KeychainError> {
            Ok(self.entries.lock().unwrap().remove(account).is_some())
        }
    }

    struct LockedKeychain;

    #[async_trait]
    impl SecretStore for LockedKeychain {
        async fn read(&self, _: &str) -> Result<Option<String>, KeychainError> {
            Err(KeychainError::AccessDenied)
        }

        async fn write(&self, _: &str, _: &str) -> Result<(), KeychainError> {
            Err(KeychainError::AccessDenied)
        }

        async fn remove(&self, _: &str) -> Result<bool, KeychainError> {
            Err(KeychainError::AccessDenied)
        }
    }

    fn memory_store() -> (Arc<MemoryKeychain>, CredentialStore) {
        let keychain = Arc::new(MemoryKeychain::default());
        let store = CredentialStore::new(keychain.clone());
        (keychain, store)
    }

    #[tokio::test]
    async fn test_set_get_delete() {
        let (_, store) = memory_store();
        assert_eq!(store.api_key().await.unwrap(), None);
        assert!(!store.has_api_key().await);

        store.set_api_key("  abc123\n").await.unwrap();
        assert_eq!(store.api_key().await.unwrap().as_deref(), Some("abc123"));
        assert!(store.has_api_key().await);

        store.delete_api_key().await.unwrap();
        assert_eq!(store.api_key().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_stored_under_expected_names() {
        let (keychain, store) = memory_store();
        store.set_api_key("abc123").await.unwrap();

        let entries = keychain.entries.lock().unwrap();
        assert_eq!(
            entries.get("weather-data-api-key").map(String::as_str),
            Some("abc123")
        );
    }

    #[tokio::test]
    async fn test_empty_key_rejected() {
        let (keychain, store) = memory_store();

        let err = store.set_api_key("   ").await.unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
        assert!(keychain.entries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_key_succeeds() {
        let (_, store) = memory_store();
        assert!(store.delete_api_key().await.is_ok());
    }

    #[tokio::test]
    async fn test_keychain_failure_propagates() {
        let store = CredentialStore::new(Arc::new(LockedKeychain));

        let err = store.api_key().await.unwrap_err();
        assert!(matches!(err, StoreError::Keychain(KeychainError::AccessDenied)));
        assert!(!store.has_api_key().await);
    }
}
