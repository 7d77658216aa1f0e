//! API key commands.

use anyhow::{Context, Result};
use clap::Args;
use eecalc_store::CredentialStore;

/// Prompt shown when the key is not passed on the command line.
pub const API_KEY_PROMPT: &str = "Enter your Weather Data API key: ";

/// Arguments for the set-api-key command.
#[derive(Args)]
pub struct SetApiKeyArgs {
    /// API key to store. Prompted for, without echo, when omitted.
    #[arg(long)]
    pub key: Option<String>,
}

/// Stores the weather API key.
pub async fn set(args: &SetApiKeyArgs) -> Result<()> {
    let key = resolve_key(args.key.clone(), || rpassword::prompt_password(API_KEY_PROMPT)).await?;

    CredentialStore::system()
        .set_api_key(&key)
        .await
        .context("Could not store API key")?;

    println!("API key saved");
    Ok(())
}

/// Removes the weather API key.
pub async fn delete() -> Result<()> {
    CredentialStore::system()
        .delete_api_key()
        .await
        .context("Could not delete API key")?;

    println!("API key deleted");
    Ok(())
}

/// Uses the key from the command line, or runs the terminal prompt.
///
/// The prompt blocks on terminal input, so it runs off the async workers.
async fn resolve_key<F>(key: Option<String>, prompt: F) -> Result<String>
where
    F: FnOnce() -> std::io::Result<String> + Send + 'static,
{
    if let Some(key) = key {
        return Ok(key);
    }

    tokio::task::spawn_blocking(prompt)
        .await
        .context("API key prompt was interrupted")?
        .context("Could not read API key")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_text() {
        assert_eq!(API_KEY_PROMPT, "Enter your Weather Data API key: ");
    }

    #[tokio::test]
    async fn test_flag_skips_prompt() {
        let key = resolve_key(Some("from-flag".into()), || {
            panic!("prompt must not run when --key is given")
        })
        .await
        .unwrap();

        assert_eq!(key, "from-flag");
    }

    #[tokio::test]
    async fn test_prompt_used_without_flag() {
        let key = resolve_key(None, || Ok("typed-secret".to_string()))
            .await
            .unwrap();

        assert_eq!(key, "typed-secret");
    }

    #[tokio::test]
    async fn test_prompt_failure_is_reported() {
        let err = resolve_key(None, || {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "no tty"))
        })
        .await
        .unwrap_err();

        assert!(format!("{err:#}").contains("Could not read API key"));
    }
}
