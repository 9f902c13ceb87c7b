//! Password Hashing and Verification
//!
//! Credential handling built on Argon2id (memory-hard, salted):
//! - Fixed, documented cost parameters so digests produced by one process
//!   version remain verifiable by any other correctly-configured process
//! - Per-credential salts from a CSPRNG (uniqueness backstopped by the store)
//! - Constant-work dummy hashing for unknown-username login attempts
//! - Zeroization of clear-text password material
//!
//! Verification fails closed: a malformed digest is a non-match, never a
//! fault visible to the caller.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::{Salt, SaltString, rand_core::OsRng},
};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Argon2id memory cost in KiB (19 MiB, OWASP recommended minimum)
pub const ARGON2_MEMORY_KIB: u32 = 19_456;

/// Argon2id time cost (iterations)
pub const ARGON2_TIME_COST: u32 = 2;

/// Argon2id lanes
pub const ARGON2_PARALLELISM: u32 = 1;

/// Argon2id tag length in bytes
pub const ARGON2_OUTPUT_LEN: usize = 32;

/// Maximum password length accepted anywhere (in characters)
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Fixed input for the constant-work dummy hash. Never a real credential.
const BURN_PASSWORD: &[u8] = b"learnquest-burn-input";

/// Fixed salt for the dummy hash (16 zero bytes, B64 without padding).
const BURN_SALT_B64: &str = "AAAAAAAAAAAAAAAAAAAAAA";

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is empty or contains only whitespace
    #[error("Password cannot be empty")]
    Empty,

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains invalid characters (control characters)
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Credential hashing errors
#[derive(Debug, Error)]
pub enum CredentialHashError {
    /// The supplied salt is not a valid B64 salt string
    #[error("Invalid salt encoding")]
    InvalidSalt,

    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Erased from memory when dropped. Does not implement `Clone`, and Debug
/// output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with minimal validation
    ///
    /// Rejects empty/whitespace-only input, over-long input, and control
    /// characters. Anything stricter (breach lists, entropy scoring) is a
    /// policy concern above this layer.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        if raw.trim().is_empty() {
            return Err(PasswordPolicyError::Empty);
        }

        let char_count = raw.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        for ch in raw.chars() {
            if ch.is_control() {
                return Err(PasswordPolicyError::InvalidCharacter);
            }
        }

        Ok(Self(raw))
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Credential Hasher
// ============================================================================

/// Argon2id hasher with the fixed parameter set applied identically to
/// hashing and verification.
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    pub fn new() -> Self {
        let params = Params::new(
            ARGON2_MEMORY_KIB,
            ARGON2_TIME_COST,
            ARGON2_PARALLELISM,
            Some(ARGON2_OUTPUT_LEN),
        )
        .expect("fixed Argon2 parameters are valid");

        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Generate a fresh per-credential salt (B64 string, 16 random bytes)
    pub fn generate_salt(&self) -> String {
        SaltString::generate(&mut OsRng).as_str().to_owned()
    }

    /// Derive a PHC-formatted digest from a password and a B64 salt string
    ///
    /// The salt is embedded in the digest; callers store it separately as
    /// well so the store can enforce salt uniqueness across credentials.
    pub fn hash(
        &self,
        password: &ClearTextPassword,
        salt_b64: &str,
    ) -> Result<String, CredentialHashError> {
        let salt = Salt::from_b64(salt_b64).map_err(|_| CredentialHashError::InvalidSalt)?;

        let digest = self
            .argon2
            .hash_password(password.as_bytes(), salt)
            .map_err(|e| CredentialHashError::HashingFailed(e.to_string()))?;

        Ok(digest.to_string())
    }

    /// Verify a password against a stored PHC digest
    ///
    /// Fails closed: a digest that does not parse is treated as a non-match.
    pub fn verify(&self, digest: &str, password: &ClearTextPassword) -> bool {
        let parsed = match PasswordHash::new(digest) {
            Ok(h) => h,
            Err(_) => return false,
        };

        // Argon2 uses constant-time comparison internally
        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    /// Perform one full-cost hash over fixed dummy input
    ///
    /// Called when a login names an unknown username, so that response
    /// latency does not distinguish "unknown username" from "known
    /// username, wrong password".
    pub fn burn(&self) {
        let salt = Salt::from_b64(BURN_SALT_B64).expect("fixed burn salt is valid B64");
        let _ = self.argon2.hash_password(BURN_PASSWORD, salt);
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialHasher")
            .field("memory_kib", &ARGON2_MEMORY_KIB)
            .field("time_cost", &ARGON2_TIME_COST)
            .field("parallelism", &ARGON2_PARALLELISM)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn password(s: &str) -> ClearTextPassword {
        ClearTextPassword::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_password_empty() {
        let result = ClearTextPassword::new("".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::Empty);

        let result = ClearTextPassword::new("    ".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::Empty);
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_password_control_chars() {
        let result = ClearTextPassword::new("pass\x00word".to_string());
        assert_eq!(result.unwrap_err(), PasswordPolicyError::InvalidCharacter);
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = CredentialHasher::new();
        let salt = hasher.generate_salt();
        let digest = hasher.hash(&password("maayos na password"), &salt).unwrap();

        assert!(hasher.verify(&digest, &password("maayos na password")));
        assert!(!hasher.verify(&digest, &password("wrong password")));
    }

    #[test]
    fn test_digest_embeds_fixed_params() {
        let hasher = CredentialHasher::new();
        let salt = hasher.generate_salt();
        let digest = hasher.hash(&password("whatever works"), &salt).unwrap();

        assert!(digest.starts_with("$argon2id$"));
        assert!(digest.contains("m=19456,t=2,p=1"));
    }

    #[test]
    fn test_single_bit_mutation_fails() {
        let hasher = CredentialHasher::new();
        let salt = hasher.generate_salt();
        let digest = hasher.hash(&password("bit flip test"), &salt).unwrap();

        // Flip one character inside the tag portion of the PHC string
        let tag_start = digest.rfind('$').unwrap() + 1;
        let mut mutated: Vec<char> = digest.chars().collect();
        mutated[tag_start] = if mutated[tag_start] == 'A' { 'B' } else { 'A' };
        let mutated: String = mutated.into_iter().collect();

        assert_ne!(digest, mutated);
        assert!(!hasher.verify(&mutated, &password("bit flip test")));
    }

    #[test]
    fn test_malformed_digest_fails_closed() {
        let hasher = CredentialHasher::new();
        assert!(!hasher.verify("not-a-phc-string", &password("anything")));
        assert!(!hasher.verify("", &password("anything")));
        assert!(!hasher.verify("$argon2id$garbage", &password("anything")));
    }

    #[test]
    fn test_invalid_salt_rejected() {
        let hasher = CredentialHasher::new();
        let result = hasher.hash(&password("salt test"), "!!!not-b64!!!");
        assert!(matches!(result, Err(CredentialHashError::InvalidSalt)));
    }

    #[test]
    fn test_salts_are_unique() {
        let hasher = CredentialHasher::new();
        let a = hasher.generate_salt();
        let b = hasher.generate_salt();
        assert_ne!(a, b);
    }

    #[test]
    fn test_burn_completes() {
        // The dummy hash must never panic; it exists purely for timing.
        CredentialHasher::new().burn();
    }

    #[test]
    fn test_debug_redaction() {
        let p = password("secret");
        let debug_output = format!("{:?}", p);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
