//! Key derivation using Argon2id.
//!
//! This module derives encryption keys from passphrases using the Argon2id
//! algorithm, which is memory-hard and resistant to GPU-based attacks.

use argon2::Argon2;
use zeroize::ZeroizeOnDrop;

use crate::error::{Result, SidekickError};

/// Length of derived key in bytes (32 bytes = 256 bits for XChaCha20).
pub const KEY_LENGTH: usize = 32;

/// Minimum accepted salt length in bytes.
pub const MIN_SALT_LENGTH: usize = 16;

/// Argon2id cost parameters.
///
/// The defaults balance security and usability:
/// - Memory: 64 MB (64 * 1024 KB)
/// - Iterations: 3
/// - Parallelism: 1 (single-threaded for simplicity)
///
/// Parameters travel inside every envelope, so decryption does not depend on
/// whatever the caller is currently configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl KdfParams {
    /// Upper bound on memory cost (1 GiB).
    pub const MAX_MEMORY_KIB: u32 = 1024 * 1024;
    /// Upper bound on iteration count.
    pub const MAX_ITERATIONS: u32 = 64;
    /// Upper bound on lanes.
    pub const MAX_PARALLELISM: u32 = 16;

    pub const fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Self {
        Self {
            memory_kib,
            iterations,
            parallelism,
        }
    }

    /// Argon2 needs at least this much memory per lane.
    pub const MIN_MEMORY_KIB_PER_LANE: u32 = 8;

    /// Check the parameters against the accepted bounds.
    pub fn validate(&self) -> Result<()> {
        if self.memory_kib == 0 || self.memory_kib > Self::MAX_MEMORY_KIB {
            return Err(SidekickError::InvalidArgument(format!(
                "KDF memory must be between 1 and {} KiB (got {})",
                Self::MAX_MEMORY_KIB,
                self.memory_kib
            )));
        }
        if self.iterations == 0 || self.iterations > Self::MAX_ITERATIONS {
            return Err(SidekickError::InvalidArgument(format!(
                "KDF iterations must be between 1 and {} (got {})",
                Self::MAX_ITERATIONS,
                self.iterations
            )));
        }
        if self.parallelism == 0 || self.parallelism > Self::MAX_PARALLELISM {
            return Err(SidekickError::InvalidArgument(format!(
                "KDF parallelism must be between 1 and {} (got {})",
                Self::MAX_PARALLELISM,
                self.parallelism
            )));
        }
        let floor = Self::MIN_MEMORY_KIB_PER_LANE * self.parallelism;
        if self.memory_kib < floor {
            return Err(SidekickError::InvalidArgument(format!(
                "KDF memory must be at least {} KiB for {} lane(s) (got {})",
                floor, self.parallelism, self.memory_kib
            )));
        }
        Ok(())
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::new(64 * 1024, 3, 1)
    }
}

/// A cryptographic key derived from a passphrase.
///
/// This type ensures that key material is securely zeroized from memory
/// when dropped, reducing the window of exposure.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The raw key bytes (zeroized on drop)
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Create a new DerivedKey from raw bytes.
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a passphrase using Argon2id.
///
/// # Arguments
///
/// * `passphrase` - The passphrase to derive from
/// * `salt` - Random salt (must be unique per encryption, at least 16 bytes)
/// * `params` - Argon2id cost parameters
///
/// # Security
///
/// - Same passphrase + salt + params always produces same key (deterministic)
/// - Different salt produces different key (salt is stored in the envelope)
///
/// # Examples
///
/// ```
/// use sidekick_core::crypto::{derive_key, KdfParams};
///
/// let salt = b"unique-salt-per-message";
/// let key = derive_key("my-passphrase", salt, &KdfParams::new(1024, 1, 1)).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(passphrase: &str, salt: &[u8], params: &KdfParams) -> Result<DerivedKey> {
    if passphrase.is_empty() {
        return Err(SidekickError::InvalidArgument(
            "Passphrase cannot be empty".to_string(),
        ));
    }

    if salt.len() < MIN_SALT_LENGTH {
        return Err(SidekickError::InvalidArgument(format!(
            "Salt must be at least {} bytes",
            MIN_SALT_LENGTH
        )));
    }

    params.validate()?;

    let argon_params = argon2::Params::new(
        params.memory_kib,
        params.iterations,
        params.parallelism,
        Some(KEY_LENGTH),
    )
    .map_err(|e| SidekickError::Crypto(format!("Failed to create Argon2 params: {}", e)))?;

    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        argon_params,
    );

    let mut key_bytes = [0u8; KEY_LENGTH];
    argon2
        .hash_password_into(passphrase.as_bytes(), salt, &mut key_bytes)
        .map_err(|e| SidekickError::Crypto(format!("Key derivation failed: {}", e)))?;

    Ok(DerivedKey::from_bytes(key_bytes))
}
