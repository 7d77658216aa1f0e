//! Host APIs for the weather client.
//!
//! - [`keychain`] - Secure credential storage (system keychain)
//! - [`http`] - HTTP transport with tracing and connection reuse

pub mod http;
pub mod keychain;

// Re-export key types
pub use http::{HttpClient, HttpResponse, HttpSettings, HttpTransport};
pub use keychain::{SecretStore, SystemKeychain};
