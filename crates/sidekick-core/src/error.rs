//! Error types for Sidekick core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them
//! to exit codes and user-friendly messages.

use thiserror::Error;

/// Result type alias for Sidekick operations.
pub type Result<T> = std::result::Result<T, SidekickError>;

/// Core error type for Sidekick operations.
#[derive(Debug, Error)]
pub enum SidekickError {
    /// Caller supplied an unusable argument (empty passphrase, short salt, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Wrong passphrase, malformed ciphertext, or failed integrity check
    #[error("Decryption failed: {0}")]
    Decryption(String),

    /// Encryption or key derivation error
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// The operating system entropy source failed
    #[error("Random source error: {0}")]
    Random(String),
}

impl SidekickError {
    /// True for failures caused by the passphrase or ciphertext on decrypt.
    pub fn is_decryption(&self) -> bool {
        matches!(self, SidekickError::Decryption(_))
    }

    /// True for failures caused by caller input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SidekickError::InvalidArgument(_))
    }
}

impl From<getrandom::Error> for SidekickError {
    fn from(err: getrandom::Error) -> Self {
        SidekickError::Random(err.to_string())
    }
}
