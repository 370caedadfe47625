//! Constants used throughout the CLI.

/// Environment variable holding the passphrase for non-interactive use.
pub const PASSPHRASE_ENV: &str = "SIDEKICK_PASSPHRASE";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "SIDEKICK_LOG";

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Decryption failed (wrong passphrase, malformed or tampered ciphertext).
    pub const AUTH_FAILED: i32 = 5;
}
