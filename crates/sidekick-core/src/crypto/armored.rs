//! ASCII-armored age encryption.
//!
//! An alternative to the native envelope for interoperability with the
//! `age` command-line tool (`age -d` accepts the output directly).
//!
//! Note: age uses scrypt internally for passphrase-based encryption rather
//! than Argon2id. The security properties are similar.

use std::io::{Read, Write};
use std::iter;

use age::armor::{ArmoredReader, ArmoredWriter, Format};
use age::secrecy::SecretString;

use super::passphrase::validate_passphrase;
use crate::error::{Result, SidekickError};

/// First line of every armored age file.
pub const ARMOR_HEADER: &str = "-----BEGIN AGE ENCRYPTED FILE-----";

/// Encrypt text into an armored age file with a passphrase recipient.
///
/// # Examples
///
/// ```no_run
/// use sidekick_core::crypto::{decrypt_armored, encrypt_armored};
///
/// let armored = encrypt_armored("secret data", "my-secure-passphrase").unwrap();
/// assert!(armored.starts_with("-----BEGIN AGE ENCRYPTED FILE-----"));
/// assert_eq!(decrypt_armored(&armored, "my-secure-passphrase").unwrap(), "secret data");
/// ```
pub fn encrypt_armored(plaintext: &str, passphrase: &str) -> Result<String> {
    validate_passphrase(passphrase)?;

    let encryptor =
        age::Encryptor::with_user_passphrase(SecretString::from(passphrase.to_string()));

    let mut armored = Vec::new();
    let armor = ArmoredWriter::wrap_output(&mut armored, Format::AsciiArmor)
        .map_err(|e| SidekickError::Crypto(format!("Failed to create armor: {}", e)))?;
    let mut writer = encryptor
        .wrap_output(armor)
        .map_err(|e| SidekickError::Crypto(format!("Failed to create encryptor: {}", e)))?;

    writer
        .write_all(plaintext.as_bytes())
        .map_err(|e| SidekickError::Crypto(format!("Encryption write failed: {}", e)))?;

    writer
        .finish()
        .and_then(|armor| armor.finish())
        .map_err(|e| SidekickError::Crypto(format!("Encryption finish failed: {}", e)))?;

    tracing::debug!(plaintext_len = plaintext.len(), "sealed armored age file");

    String::from_utf8(armored)
        .map_err(|e| SidekickError::Crypto(format!("Armor produced invalid text: {}", e)))
}

/// Decrypt an armored age file produced by [`encrypt_armored`] (or `age -p -a`).
///
/// # Errors
///
/// - [`SidekickError::InvalidArgument`] if the passphrase is empty
/// - [`SidekickError::Decryption`] for a wrong passphrase, malformed armor,
///   tampered payload, or non-UTF-8 plaintext
pub fn decrypt_armored(armored: &str, passphrase: &str) -> Result<String> {
    validate_passphrase(passphrase)?;

    let decryptor = age::Decryptor::new(ArmoredReader::new(armored.trim().as_bytes()))
        .map_err(|e| SidekickError::Decryption(format!("malformed armored input: {}", e)))?;

    let identity = age::scrypt::Identity::new(SecretString::from(passphrase.to_string()));
    let mut reader = decryptor
        .decrypt(iter::once(&identity as &dyn age::Identity))
        .map_err(|e| match e {
            age::DecryptError::NoMatchingKeys
            | age::DecryptError::DecryptionFailed
            | age::DecryptError::KeyDecryptionFailed => SidekickError::Decryption(
                "wrong passphrase or tampered ciphertext".to_string(),
            ),
            other => SidekickError::Decryption(other.to_string()),
        })?;

    let mut decrypted = Vec::new();
    reader
        .read_to_end(&mut decrypted)
        .map_err(|e| SidekickError::Decryption(format!("payload failed to verify: {}", e)))?;

    String::from_utf8(decrypted)
        .map_err(|_| SidekickError::Decryption("plaintext is not valid UTF-8".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armored_round_trip() {
        let armored = encrypt_armored("Hello, World! 你好", "yourSecretKey").unwrap();
        assert!(armored.starts_with(ARMOR_HEADER));
        assert_eq!(
            decrypt_armored(&armored, "yourSecretKey").unwrap(),
            "Hello, World! 你好"
        );
    }

    #[test]
    fn test_armored_wrong_passphrase() {
        let armored = encrypt_armored("secret", "correct-passphrase").unwrap();
        let result = decrypt_armored(&armored, "wrong-passphrase");
        assert!(matches!(result, Err(SidekickError::Decryption(_))));
    }

    #[test]
    fn test_armored_garbage_rejected() {
        let result = decrypt_armored("definitely not age", "pass");
        assert!(matches!(result, Err(SidekickError::Decryption(_))));
    }

    #[test]
    fn test_armored_empty_passphrase() {
        let result = encrypt_armored("text", "");
        assert!(matches!(result, Err(SidekickError::InvalidArgument(_))));
    }

    #[test]
    fn test_armored_empty_input_and_passphrase() {
        let result = decrypt_armored("", "");
        assert!(matches!(result, Err(SidekickError::InvalidArgument(_))));
    }

    #[test]
    fn test_armored_empty_plaintext() {
        let armored = encrypt_armored("", "pass").unwrap();
        assert_eq!(decrypt_armored(&armored, "pass").unwrap(), "");
    }

    #[test]
    fn test_armored_tampered_body_rejected() {
        let armored = encrypt_armored("tamper me", "pass").unwrap();
        let lines: Vec<&str> = armored.lines().collect();
        assert!(lines.len() > 2);

        // Every body line sits between the BEGIN and END markers.
        for index in 1..lines.len() - 1 {
            let mut tampered: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
            let first = tampered[index].remove(0);
            let replacement = if first == 'A' { 'B' } else { 'A' };
            tampered[index].insert(0, replacement);

            let result = decrypt_armored(&(tampered.join("\n") + "\n"), "pass");
            assert!(
                matches!(result, Err(SidekickError::Decryption(_))),
                "line {} tamper not detected",
                index
            );
        }
    }

    #[test]
    fn test_armored_non_utf8_plaintext() {
        let encryptor =
            age::Encryptor::with_user_passphrase(SecretString::from("pass".to_string()));
        let mut armored = Vec::new();
        let armor = ArmoredWriter::wrap_output(&mut armored, Format::AsciiArmor).unwrap();
        let mut writer = encryptor.wrap_output(armor).unwrap();
        writer.write_all(&[0xFF, 0xFE, 0xFD]).unwrap();
        writer.finish().and_then(|armor| armor.finish()).unwrap();

        let result = decrypt_armored(&String::from_utf8(armored).unwrap(), "pass");
        assert!(matches!(result, Err(SidekickError::Decryption(_))));
    }
}
