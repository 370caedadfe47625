//! Cryptographic operations for Sidekick.
//!
//! This module provides passphrase-based text encryption using
//! well-audited libraries:
//! - **Argon2id**: Memory-hard key derivation function
//! - **XChaCha20-Poly1305**: Authenticated encryption with 192-bit random nonces
//! - **Age**: Armored passphrase encryption for interop with the `age` tool
//!
//! ## Security Model
//!
//! - A fresh salt and nonce per encryption; ciphertext never repeats
//! - Tampering, truncation and wrong passphrases are detected, not decoded
//! - Derived keys are zeroized from memory on drop and never logged
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft or modification of ciphertext in transit or at rest
//! - Offline brute-force attacks on the passphrase
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Weak passphrases

pub mod armored;
pub mod cipher;
pub mod envelope;
pub mod key;
pub mod passphrase;

pub use armored::{decrypt_armored, encrypt_armored, ARMOR_HEADER};
pub use cipher::{decrypt, encrypt, encrypt_with_params};
pub use envelope::Envelope;
pub use key::{derive_key, DerivedKey, KdfParams};
pub use passphrase::validate_passphrase;

use crate::error::Result;

/// Encoded ciphertext formats understood by [`decrypt_auto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherFormat {
    /// Native base64 envelope (Argon2id + XChaCha20-Poly1305).
    Envelope,
    /// ASCII-armored age file.
    Age,
}

impl CipherFormat {
    /// Guess the format of encoded ciphertext.
    pub fn detect(encoded: &str) -> Self {
        if encoded.trim_start().starts_with(ARMOR_HEADER) {
            CipherFormat::Age
        } else {
            CipherFormat::Envelope
        }
    }

    pub fn encrypt(self, plaintext: &str, passphrase: &str, params: &KdfParams) -> Result<String> {
        match self {
            CipherFormat::Envelope => encrypt_with_params(plaintext, passphrase, params),
            CipherFormat::Age => encrypt_armored(plaintext, passphrase),
        }
    }

    pub fn decrypt(self, encoded: &str, passphrase: &str) -> Result<String> {
        match self {
            CipherFormat::Envelope => decrypt(encoded, passphrase),
            CipherFormat::Age => decrypt_armored(encoded, passphrase),
        }
    }
}

/// Decrypt either format, choosing by [`CipherFormat::detect`].
pub fn decrypt_auto(encoded: &str, passphrase: &str) -> Result<String> {
    CipherFormat::detect(encoded).decrypt(encoded, passphrase)
}
