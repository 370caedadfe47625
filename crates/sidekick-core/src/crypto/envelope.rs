//! Versioned ciphertext envelope.
//!
//! Layout (version 1), all integers little-endian, then standard base64:
//!
//! ```text
//! offset  size  field
//! 0       1     version (0x01)
//! 1       4     Argon2id memory cost, KiB
//! 5       4     Argon2id iterations
//! 9       4     Argon2id parallelism
//! 13      16    salt
//! 29      24    XChaCha20 nonce
//! 53      n+16  ciphertext || Poly1305 tag
//! ```
//!
//! Bytes `0..29` are bound to the ciphertext as associated data.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::key::KdfParams;
use crate::error::{Result, SidekickError};

/// Current envelope format version.
pub const ENVELOPE_VERSION: u8 = 1;

/// Salt length in bytes.
pub const SALT_LENGTH: usize = 16;

/// XChaCha20 nonce length in bytes.
pub const NONCE_LENGTH: usize = 24;

/// Poly1305 tag length in bytes.
pub const TAG_LENGTH: usize = 16;

/// Length of the authenticated header (version, params, salt).
pub const HEADER_LENGTH: usize = 1 + 4 * 3 + SALT_LENGTH;

/// Smallest valid decoded envelope: header, nonce, and a bare tag.
pub const MIN_ENVELOPE_LENGTH: usize = HEADER_LENGTH + NONCE_LENGTH + TAG_LENGTH;

/// Everything needed to decrypt a message except the passphrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub params: KdfParams,
    pub salt: [u8; SALT_LENGTH],
    pub nonce: [u8; NONCE_LENGTH],
    /// Ciphertext with the Poly1305 tag appended.
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Bytes authenticated alongside the ciphertext.
    pub fn header(&self) -> [u8; HEADER_LENGTH] {
        let mut header = [0u8; HEADER_LENGTH];
        header[0] = ENVELOPE_VERSION;
        header[1..5].copy_from_slice(&self.params.memory_kib.to_le_bytes());
        header[5..9].copy_from_slice(&self.params.iterations.to_le_bytes());
        header[9..13].copy_from_slice(&self.params.parallelism.to_le_bytes());
        header[13..].copy_from_slice(&self.salt);
        header
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LENGTH + NONCE_LENGTH + self.ciphertext.len());
        bytes.extend_from_slice(&self.header());
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(&self.ciphertext);
        bytes
    }

    /// Parse a decoded envelope.
    ///
    /// Every failure is reported as [`SidekickError::Decryption`], including
    /// out-of-bounds KDF parameters.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < MIN_ENVELOPE_LENGTH {
            return Err(SidekickError::Decryption(format!(
                "ciphertext is truncated ({} bytes, need at least {})",
                bytes.len(),
                MIN_ENVELOPE_LENGTH
            )));
        }

        let version = bytes[0];
        if version != ENVELOPE_VERSION {
            return Err(SidekickError::Decryption(format!(
                "unsupported envelope version {}",
                version
            )));
        }

        let params = KdfParams::new(
            read_u32(&bytes[1..5]),
            read_u32(&bytes[5..9]),
            read_u32(&bytes[9..13]),
        );
        params
            .validate()
            .map_err(|e| SidekickError::Decryption(format!("bad envelope header: {}", e)))?;

        let mut salt = [0u8; SALT_LENGTH];
        salt.copy_from_slice(&bytes[13..HEADER_LENGTH]);

        let mut nonce = [0u8; NONCE_LENGTH];
        nonce.copy_from_slice(&bytes[HEADER_LENGTH..HEADER_LENGTH + NONCE_LENGTH]);

        Ok(Self {
            params,
            salt,
            nonce,
            ciphertext: bytes[HEADER_LENGTH + NONCE_LENGTH..].to_vec(),
        })
    }

    /// Encode as printable text.
    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Decode printable text produced by [`Envelope::encode`].
    ///
    /// Surrounding whitespace (e.g. a trailing newline from a pipe) is ignored.
    pub fn decode(encoded: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| SidekickError::Decryption(format!("ciphertext is not base64: {}", e)))?;
        Self::from_bytes(&bytes)
    }
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_le_bytes(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Envelope {
        Envelope {
            params: KdfParams::new(1024, 2, 1),
            salt: [7u8; SALT_LENGTH],
            nonce: [9u8; NONCE_LENGTH],
            ciphertext: vec![0xAB; TAG_LENGTH + 5],
        }
    }

    #[test]
    fn test_layout_offsets() {
        let bytes = sample().to_bytes();
        assert_eq!(bytes[0], ENVELOPE_VERSION);
        assert_eq!(&bytes[1..5], &1024u32.to_le_bytes());
        assert_eq!(&bytes[5..9], &2u32.to_le_bytes());
        assert_eq!(&bytes[9..13], &1u32.to_le_bytes());
        assert_eq!(&bytes[13..29], &[7u8; 16]);
        assert_eq!(&bytes[29..53], &[9u8; 24]);
        assert_eq!(bytes.len(), 53 + TAG_LENGTH + 5);
    }

    #[test]
    fn test_encode_decode() {
        let envelope = sample();
        let decoded = Envelope::decode(&format!("  {}\n", envelope.encode())).unwrap();
        assert_eq!(decoded, envelope);
    }

    #[test]
    fn test_truncated_rejected() {
        let bytes = sample().to_bytes();
        let result = Envelope::from_bytes(&bytes[..MIN_ENVELOPE_LENGTH - 1]);
        assert!(matches!(result, Err(SidekickError::Decryption(_))));
    }

    #[test]
    fn test_unknown_version_rejected() {
        let mut bytes = sample().to_bytes();
        bytes[0] = 2;
        let err = Envelope::from_bytes(&bytes).unwrap_err();
        assert!(err.to_string().contains("unsupported envelope version 2"));
    }

    #[test]
    fn test_excessive_memory_rejected() {
        let mut bytes = sample().to_bytes();
        bytes[1..5].copy_from_slice(&u32::MAX.to_le_bytes());
        let result = Envelope::from_bytes(&bytes);
        assert!(matches!(result, Err(SidekickError::Decryption(_))));
    }

    #[test]
    fn test_not_base64_rejected() {
        let result = Envelope::decode("not base64 at all!");
        assert!(matches!(result, Err(SidekickError::Decryption(_))));
    }
}
