//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generate an unguessable opaque token (URL-safe base64, no padding)
///
/// The token carries no embedded claims; possession is the only credential.
/// 32 bytes of entropy yields a 43-character token.
pub fn opaque_token(entropy_bytes: usize) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(random_bytes(entropy_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_opaque_token_length() {
        // 32 bytes -> ceil(32 * 4 / 3) = 43 chars without padding
        let token = opaque_token(32);
        assert_eq!(token.len(), 43);
        assert!(!token.contains('='));
    }

    #[test]
    fn test_opaque_token_unique() {
        let a = opaque_token(32);
        let b = opaque_token(32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_opaque_token_url_safe() {
        let token = opaque_token(64);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }
}
