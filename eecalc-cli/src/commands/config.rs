//! Config command - inspect, change and reset settings.

use anyhow::Result;
use clap::{Args, Subcommand};
use eecalc_store::{
    CredentialStore, SettingsStore, default_config_dir, default_settings_path, remove_file,
};
use tracing::info;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration.
    Show,

    /// Show configuration paths.
    Path,

    /// Change a setting.
    Set {
        /// Setting name, e.g. max_attempts or heat_pumps_path.
        field: String,

        /// New value. Use "none" to clear a dataset path.
        value: String,
    },

    /// Reset to defaults.
    Reset,
}

/// Runs the config command.
pub async fn run(args: &ConfigArgs) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config().await,
        ConfigAction::Path => show_paths(),
        ConfigAction::Set { field, value } => set_field(field, value).await,
        ConfigAction::Reset => reset_config().await,
    }
}

async fn show_config() -> Result<()> {
    let store = SettingsStore::load_default().await?;
    let settings = store.get();
    let has_key = CredentialStore::system().has_api_key().await;

    println!("eecalc Configuration");
    println!("{}", "─".repeat(40));
    println!();
    println!("API URL:        {}/{}", settings.api_base_url, settings.api_version);
    println!("API key:        {}", if has_key { "set" } else { "not set" });
    println!("Timeout:        {}s", settings.request_timeout_secs);
    println!("Max attempts:   {}", settings.max_attempts);
    println!("Base backoff:   {}ms", settings.base_delay_ms);
    println!("Buildings:      {}", describe_source(settings.buildings_path.as_deref()));
    println!("Heat pumps:     {}", describe_source(settings.heat_pumps_path.as_deref()));

    Ok(())
}

fn show_paths() -> Result<()> {
    println!("Configuration Paths");
    println!("{}", "─".repeat(40));
    println!();
    println!("Config dir:    {}", default_config_dir().display());
    println!("Settings file: {}", default_settings_path().display());

    Ok(())
}

async fn set_field(field: &str, value: &str) -> Result<()> {
    let mut store = SettingsStore::load_default().await?;
    store.update(|s| s.set_field(field, value))?;
    store.save().await?;

    info!(field, "Setting updated");
    println!("Set {field} in {}", store.path().display());

    Ok(())
}

async fn reset_config() -> Result<()> {
    // Remove the file directly so a broken settings file can still be reset.
    if remove_file(&default_settings_path()).await? {
        println!("Configuration reset to defaults");
    } else {
        println!("No configuration file to reset");
    }

    Ok(())
}

fn describe_source(path: Option<&std::path::Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "bundled".to_string(),
    }
}
