//! User Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{user_id::UserId, user_name::UserName, user_role::UserRole};

/// User account entity
///
/// Carries the stored credential material. The salt is embedded in the PHC
/// digest as well; it is held separately so the store can enforce salt
/// uniqueness across accounts.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub username: UserName,
    pub password_digest: String,
    pub salt: String,
    pub role: UserRole,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        username: UserName,
        password_digest: String,
        salt: String,
        role: UserRole,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            username,
            password_digest,
            salt,
            role,
            archived: false,
            created_at: Utc::now(),
        }
    }

    /// Archived accounts cannot authenticate
    pub fn can_log_in(&self) -> bool {
        !self.archived
    }
}
