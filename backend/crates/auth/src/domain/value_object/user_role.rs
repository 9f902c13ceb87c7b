use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role, stored as a text code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Admin => "admin",
            Teacher => "teacher",
            Student => "student",
        }
    }

    /// Parse a stored role code. Unknown codes are a data fault, so this
    /// returns `None` rather than guessing.
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "admin" => Some(Admin),
            "teacher" => Some(Teacher),
            "student" => Some(Student),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_student(&self) -> bool {
        matches!(self, UserRole::Student)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_code() {
        assert_eq!(UserRole::from_code("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_code("teacher"), Some(UserRole::Teacher));
        assert_eq!(UserRole::from_code("student"), Some(UserRole::Student));
        assert_eq!(UserRole::from_code("principal"), None);
    }

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Admin.to_string(), "admin");
        assert_eq!(UserRole::Teacher.to_string(), "teacher");
        assert_eq!(UserRole::Student.to_string(), "student");
    }

    #[test]
    fn test_is_student() {
        assert!(UserRole::Student.is_student());
        assert!(!UserRole::Teacher.is_student());
        assert!(!UserRole::Admin.is_student());
    }
}
