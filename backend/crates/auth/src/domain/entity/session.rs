//! Session Entity
//!
//! Server-side session keyed by an opaque bearer token. The token carries
//! no embedded claims and no signature; validity is decided purely by
//! looking it up in the store and checking the expiry.

use chrono::{DateTime, Duration, Utc};

use crate::domain::value_object::{user_id::UserId, user_role::UserRole};

/// Entropy of the session token in bytes (43 base64 characters)
pub const SESSION_TOKEN_BYTES: usize = 32;

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque token, also the primary key in the store
    pub token_id: String,
    /// Owning user
    pub user_id: UserId,
    /// Absolute expiry. Fixed at creation, never slid forward.
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session with a fresh token
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, ttl: std::time::Duration) -> Self {
        let now = Utc::now();

        Self {
            token_id: platform::crypto::opaque_token(SESSION_TOKEN_BYTES),
            user_id,
            expires_at: now + Duration::seconds(ttl.as_secs() as i64),
            created_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Remaining lifetime in whole seconds, zero once expired
    pub fn remaining_secs(&self) -> i64 {
        (self.expires_at - Utc::now()).num_seconds().max(0)
    }
}

/// The identity a valid session resolves to (non-sensitive)
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub user_id: UserId,
    pub username: String,
    pub role: UserRole,
    pub expires_at: DateTime<Utc>,
}
