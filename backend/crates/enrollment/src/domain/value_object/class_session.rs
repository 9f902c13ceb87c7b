use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-day session a classroom runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassSession {
    Morning,
    Afternoon,
}

impl ClassSession {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ClassSession::Morning => "morning",
            ClassSession::Afternoon => "afternoon",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "morning" => Some(ClassSession::Morning),
            "afternoon" => Some(ClassSession::Afternoon),
            _ => None,
        }
    }
}

impl fmt::Display for ClassSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_session_from_code() {
        assert_eq!(ClassSession::from_code("morning"), Some(ClassSession::Morning));
        assert_eq!(ClassSession::from_code("afternoon"), Some(ClassSession::Afternoon));
        assert_eq!(ClassSession::from_code("evening"), None);
    }
}
