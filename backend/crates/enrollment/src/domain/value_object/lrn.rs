use serde::{Deserialize, Serialize};
use std::fmt;

/// Required LRN length
pub const LRN_LENGTH: usize = 12;

/// Learner Reference Number
///
/// Exactly 12 ASCII digits. Doubles as the student's username, so its
/// shape is enforced once here and trusted everywhere downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lrn(String);

impl Lrn {
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();

        if trimmed.len() != LRN_LENGTH {
            return None;
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Lrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
