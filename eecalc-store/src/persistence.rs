//! JSON file persistence.
//!
//! Settings are small, so files are read and written whole. Writes go
//! through a temp file and a rename so a crash never leaves half a file.

use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::StoreError;

/// Directory name used under the platform config dir.
const APP_DIR: &str = "eecalc";

/// Settings file name.
const SETTINGS_FILE: &str = "settings.json";

// ============================================================================
// Default Paths
// ============================================================================

/// Returns the default configuration directory.
///
/// - Linux: `~/.config/eecalc`
/// - macOS: `~/Library/Application Support/eecalc`
/// - Windows: `%APPDATA%\eecalc`
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Returns the default settings file path.
pub fn default_settings_path() -> PathBuf {
    default_config_dir().join(SETTINGS_FILE)
}

// ============================================================================
// Permissions
// ============================================================================

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = tokio::fs::metadata(path).await?.permissions();
    perms.set_mode(0o600);
    tokio::fs::set_permissions(path, perms).await?;

    debug!(path = %path.display(), mode = "0600", "Set restrictive permissions");
    Ok(())
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

// ============================================================================
// File Operations
// ============================================================================

/// Saves data to a JSON file, creating parent directories as needed.
pub async fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    debug!(path = %path.display(), "Saving JSON file");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let json = serde_json::to_string_pretty(data)?;

    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, &json).await?;
    tokio::fs::rename(&temp_path, path).await?;

    restrict_permissions(path).await?;

    debug!(path = %path.display(), "JSON file saved");
    Ok(())
}

/// Loads data from a JSON file.
pub async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    debug!(path = %path.display(), "Loading JSON file");

    let content = tokio::fs::read_to_string(path).await?;
    let data = serde_json::from_str(&content)?;

    Ok(data)
}

/// Loads data from a JSON file, returning the default if it is missing.
///
/// A file that exists but cannot be parsed is also replaced by the default,
/// with a warning.
pub async fn load_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load_json(path).await {
        Ok(data) => data,
        Err(e) if e.is_not_found() => {
            debug!(path = %path.display(), "File not found, using defaults");
            T::default()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load, using defaults");
            T::default()
        }
    }
}

/// Removes a file. Returns `false` if there was nothing to remove.
pub async fn remove_file(path: &Path) -> Result<bool, StoreError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            debug!(path = %path.display(), "File removed");
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_default_settings_path() {
        let path = default_settings_path();
        assert!(path.ends_with("eecalc/settings.json"));
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("sample.json");
        let sample = Sample {
            name: "radiator".into(),
            count: 3,
        };

        save_json(&path, &sample).await.unwrap();
        let loaded: Sample = load_json(&path).await.unwrap();

        assert_eq!(loaded, sample);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_missing_file_yields_default() {
        let dir = TempDir::new().unwrap();
        let loaded: Sample = load_json_or_default(&dir.path().join("absent.json")).await;
        assert_eq!(loaded, Sample::default());
    }

    #[tokio::test]
    async fn test_corrupt_file_yields_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let loaded: Sample = load_json_or_default(&path).await;
        assert_eq!(loaded, Sample::default());

        let err = load_json::<Sample>(&path).await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_remove_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, "{}").await.unwrap();

        assert!(remove_file(&path).await.unwrap());
        assert!(!remove_file(&path).await.unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        save_json(&path, &Sample::default()).await.unwrap();

        let mode = tokio::fs::metadata(&path).await.unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }
}
