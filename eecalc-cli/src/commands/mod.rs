//! CLI command implementations.

pub mod calculate;
pub mod config;
pub mod credentials;
