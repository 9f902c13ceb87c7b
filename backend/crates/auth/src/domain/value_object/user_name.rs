use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum username length in characters
pub const MAX_USER_NAME_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username must be at most {max} characters")]
    TooLong { max: usize },

    #[error("Username cannot contain whitespace or control characters")]
    InvalidCharacter,
}

/// Username value object
///
/// Students log in with their LRN as username, staff with assigned names.
/// Both are plain tokens: trimmed, non-empty, no embedded whitespace.
/// Lookup is by exact match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: &str) -> Result<Self, UserNameError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }
        if trimmed.chars().count() > MAX_USER_NAME_LENGTH {
            return Err(UserNameError::TooLong {
                max: MAX_USER_NAME_LENGTH,
            });
        }
        if trimmed.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(UserNameError::InvalidCharacter);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_trims() {
        let name = UserName::new("  123456789012  ").unwrap();
        assert_eq!(name.as_str(), "123456789012");
    }

    #[test]
    fn test_user_name_empty() {
        assert_eq!(UserName::new("").unwrap_err(), UserNameError::Empty);
        assert_eq!(UserName::new("   ").unwrap_err(), UserNameError::Empty);
    }

    #[test]
    fn test_user_name_too_long() {
        let long = "a".repeat(MAX_USER_NAME_LENGTH + 1);
        assert!(matches!(
            UserName::new(&long),
            Err(UserNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_user_name_rejects_inner_whitespace() {
        assert_eq!(
            UserName::new("juan dela cruz").unwrap_err(),
            UserNameError::InvalidCharacter
        );
    }
}
