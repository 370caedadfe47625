//! Passphrase resolution.

use dialoguer::Password;
use secrecy::SecretString;
use sidekick_core::EnvSource;

use crate::constants::PASSPHRASE_ENV;
use crate::errors::CliError;

/// Resolve the passphrase from `SIDEKICK_PASSPHRASE`, else prompt.
///
/// Blank environment values are ignored. `confirm` asks twice (for encrypt).
pub fn resolve_passphrase(
    env: &dyn EnvSource,
    interactive: bool,
    confirm: bool,
) -> anyhow::Result<SecretString> {
    if let Some(value) = env.get(PASSPHRASE_ENV) {
        if !value.trim().is_empty() {
            tracing::debug!("using passphrase from {}", PASSPHRASE_ENV);
            return Ok(SecretString::from(value));
        }
    }

    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No passphrase provided and no TTY available. Set {}.",
            PASSPHRASE_ENV
        ))
        .into());
    }

    let prompt = Password::new().with_prompt("Passphrase");
    let prompt = if confirm {
        prompt.with_confirmation("Confirm passphrase", "Passphrases do not match")
    } else {
        prompt
    };
    let value = prompt
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))?;
    Ok(SecretString::from(value))
}
