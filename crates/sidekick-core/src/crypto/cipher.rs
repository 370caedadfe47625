//! Passphrase-based text encryption.
//!
//! Each call derives a fresh Argon2id key from the passphrase and a random
//! salt, then seals the text with XChaCha20-Poly1305 under a random nonce.
//! See [`super::envelope`] for the encoded layout.

use chacha20poly1305::aead::{Aead, KeyInit, Payload};
use chacha20poly1305::{Key, XChaCha20Poly1305, XNonce};

use super::envelope::{Envelope, NONCE_LENGTH, SALT_LENGTH};
use super::key::{derive_key, DerivedKey, KdfParams};
use super::passphrase::validate_passphrase;
use crate::error::{Result, SidekickError};
use crate::token::fill_random;

/// Encrypt text with a passphrase using the default KDF parameters.
///
/// Two calls with the same inputs produce different output because the salt
/// and nonce are random.
///
/// # Examples
///
/// ```
/// use sidekick_core::crypto::{decrypt, encrypt_with_params, KdfParams};
///
/// let params = KdfParams::new(1024, 1, 1);
/// let sealed = encrypt_with_params("Hello, World!", "yourSecretKey", &params).unwrap();
/// assert_eq!(decrypt(&sealed, "yourSecretKey").unwrap(), "Hello, World!");
/// ```
pub fn encrypt(plaintext: &str, passphrase: &str) -> Result<String> {
    encrypt_with_params(plaintext, passphrase, &KdfParams::default())
}

/// Encrypt text with explicit Argon2id parameters.
///
/// The parameters are recorded in the envelope; [`decrypt`] does not need them.
pub fn encrypt_with_params(plaintext: &str, passphrase: &str, params: &KdfParams) -> Result<String> {
    validate_passphrase(passphrase)?;
    params.validate()?;

    let mut salt = [0u8; SALT_LENGTH];
    fill_random(&mut salt)?;
    let mut nonce = [0u8; NONCE_LENGTH];
    fill_random(&mut nonce)?;

    let key = derive_key(passphrase, &salt, params)?;

    let mut envelope = Envelope {
        params: *params,
        salt,
        nonce,
        ciphertext: Vec::new(),
    };
    let header = envelope.header();
    envelope.ciphertext = new_cipher(&key)
        .encrypt(
            XNonce::from_slice(&nonce),
            Payload {
                msg: plaintext.as_bytes(),
                aad: &header,
            },
        )
        .map_err(|e| SidekickError::Crypto(format!("Encryption failed: {}", e)))?;

    tracing::debug!(
        plaintext_len = plaintext.len(),
        memory_kib = params.memory_kib,
        iterations = params.iterations,
        "sealed text envelope"
    );

    Ok(envelope.encode())
}

/// Decrypt text produced by [`encrypt`] or [`encrypt_with_params`].
///
/// # Errors
///
/// - [`SidekickError::InvalidArgument`] if the passphrase is empty
/// - [`SidekickError::Decryption`] if the passphrase is wrong, the input is
///   malformed or truncated, the tag does not verify, or the plaintext is
///   not UTF-8
pub fn decrypt(encoded: &str, passphrase: &str) -> Result<String> {
    validate_passphrase(passphrase)?;

    let envelope = Envelope::decode(encoded)?;
    let key = derive_key(passphrase, &envelope.salt, &envelope.params).map_err(|e| {
        SidekickError::Decryption(format!("cannot derive key from envelope: {}", e))
    })?;

    let header = envelope.header();
    let plaintext = new_cipher(&key)
        .decrypt(
            XNonce::from_slice(&envelope.nonce),
            Payload {
                msg: &envelope.ciphertext,
                aad: &header,
            },
        )
        .map_err(|_| {
            tracing::debug!("envelope authentication failed");
            SidekickError::Decryption("wrong passphrase or tampered ciphertext".to_string())
        })?;

    String::from_utf8(plaintext)
        .map_err(|_| SidekickError::Decryption("plaintext is not valid UTF-8".to_string()))
}

fn new_cipher(key: &DerivedKey) -> XChaCha20Poly1305 {
    XChaCha20Poly1305::new(Key::from_slice(key.as_bytes()))
}
