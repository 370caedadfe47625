//! # Sidekick Core
//!
//! Core library for Sidekick - a small toolkit of everyday utilities.
//!
//! This crate holds all behavior; the CLI is a thin shell around it.
//!
//! ## Modules
//!
//! - **crypto**: Passphrase-based text encryption (Argon2id + XChaCha20-Poly1305,
//!   with an age-armored alternative)
//! - **clock**: Injectable clock and timestamp formatting
//! - **env**: Injectable environment lookup with defaults
//! - **token**: Random hex tokens

pub mod clock;
pub mod crypto;
pub mod env;
pub mod error;
pub mod token;

pub use clock::{format_now, format_timestamp, Clock, FixedClock, SystemClock};
pub use crypto::{decrypt, decrypt_auto, encrypt, encrypt_with_params, CipherFormat, KdfParams};
pub use env::{get_or, EnvSource, MapEnv, ProcessEnv};
pub use error::{Result, SidekickError};
pub use token::{random_token, MAX_TOKEN_LENGTH};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
