// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # eecalc Store
//!
//! Local state for eecalc.
//!
//! - **SettingsStore**: Settings file with defaults
//! - **ReferenceData**: Bundled building and heat pump datasets
//! - **CredentialStore**: Weather API key in the system keychain
//!
//! ## Usage
//!
//! ```ignore
//! use eecalc_store::{CredentialStore, ReferenceData, SettingsStore};
//!
//! let settings = SettingsStore::load_default().await?;
//! let data = ReferenceData::load(settings.get()).await?;
//! let key = CredentialStore::system().api_key().await?;
//! let config = settings.get().weather_client_config(key);
//! ```

pub mod credentials;
pub mod error;
pub mod persistence;
pub mod reference;
pub mod settings;

pub use credentials::CredentialStore;
pub use error::StoreError;
pub use persistence::{
    default_config_dir, default_settings_path, load_json, load_json_or_default, remove_file,
    save_json,
};
pub use reference::ReferenceData;
pub use settings::{Settings, SettingsStore};
