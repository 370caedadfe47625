//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use sidekick_core::SidekickError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Decryption failed (wrong passphrase, tampered or malformed input)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Map core errors that have a dedicated exit code.
    pub fn from_core(err: &SidekickError) -> Option<Self> {
        if err.is_decryption() {
            Some(CliError::auth_failed_with_hint(
                err.to_string(),
                "Check the passphrase and that the ciphertext was copied completely.",
            ))
        } else if err.is_invalid_argument() {
            Some(CliError::invalid_input(err.to_string()))
        } else {
            None
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_decryption_maps_to_auth_failed() {
        let err = CliError::from_core(&SidekickError::Decryption("bad tag".into())).unwrap();
        assert_eq!(err.exit_code(), exit_codes::AUTH_FAILED);
        assert!(err.to_string().contains("bad tag"));
    }

    #[test]
    fn test_invalid_argument_maps_to_invalid_input() {
        let err =
            CliError::from_core(&SidekickError::InvalidArgument("empty".into())).unwrap();
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_other_errors_unmapped() {
        assert!(CliError::from_core(&SidekickError::Random("os".into())).is_none());
        assert!(CliError::from_core(&SidekickError::Crypto("argon2".into())).is_none());
    }
}
