//! Random bytes and tokens from the operating system entropy source.

use crate::error::{Result, SidekickError};

/// Longest token [`random_token`] will produce.
pub const MAX_TOKEN_LENGTH: usize = 4096;

/// Fill `buf` with cryptographically secure random bytes.
pub fn fill_random(buf: &mut [u8]) -> Result<()> {
    getrandom::getrandom(buf)?;
    Ok(())
}

/// Generate a random lowercase hex token of exactly `length` characters.
///
/// Draws `ceil(length / 2)` random bytes, hex-encodes them and truncates.
/// Lengths above [`MAX_TOKEN_LENGTH`] are rejected with
/// [`SidekickError::InvalidArgument`].
///
/// # Examples
///
/// ```
/// use sidekick_core::random_token;
///
/// let token = random_token(10).unwrap();
/// assert_eq!(token.len(), 10);
/// assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn random_token(length: usize) -> Result<String> {
    if length > MAX_TOKEN_LENGTH {
        return Err(SidekickError::InvalidArgument(format!(
            "Token length must be at most {} (got {})",
            MAX_TOKEN_LENGTH, length
        )));
    }
    let mut bytes = vec![0u8; length.div_ceil(2)];
    fill_random(&mut bytes)?;
    let mut token = hex::encode(&bytes);
    token.truncate(length);
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length() {
        for length in [0, 1, 2, 9, 10, 33, 64] {
            assert_eq!(random_token(length).unwrap().len(), length);
        }
    }

    #[test]
    fn test_length_limit() {
        assert_eq!(
            random_token(MAX_TOKEN_LENGTH).unwrap().len(),
            MAX_TOKEN_LENGTH
        );
        assert!(matches!(
            random_token(MAX_TOKEN_LENGTH + 1),
            Err(SidekickError::InvalidArgument(_))
        ));
        assert!(matches!(
            random_token(usize::MAX),
            Err(SidekickError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_zero_length_is_empty() {
        assert_eq!(random_token(0).unwrap(), "");
    }

    #[test]
    fn test_lowercase_hex_alphabet() {
        let token = random_token(256).unwrap();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_tokens_differ() {
        assert_ne!(random_token(32).unwrap(), random_token(32).unwrap());
    }

    #[test]
    fn test_fill_random_changes_buffer() {
        let mut buf = [0u8; 32];
        fill_random(&mut buf).unwrap();
        assert_ne!(buf, [0u8; 32]);
    }
}
