//! Passphrase validation.

use crate::error::{Result, SidekickError};

/// Validate that a passphrase is usable.
///
/// The only requirement is that it is non-empty. Whitespace-only
/// passphrases are accepted; strength policy belongs to the caller.
///
/// # Examples
///
/// ```
/// use sidekick_core::crypto::validate_passphrase;
///
/// assert!(validate_passphrase("yourSecretKey").is_ok());
/// assert!(validate_passphrase("").is_err());
/// ```
pub fn validate_passphrase(passphrase: &str) -> Result<()> {
    if passphrase.is_empty() {
        return Err(SidekickError::InvalidArgument(
            "Passphrase cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        let result = validate_passphrase("");
        assert!(matches!(result, Err(SidekickError::InvalidArgument(_))));
    }

    #[test]
    fn test_single_character_accepted() {
        assert!(validate_passphrase("k").is_ok());
    }

    #[test]
    fn test_multibyte_accepted() {
        assert!(validate_passphrase("密钥🔑").is_ok());
    }
}
