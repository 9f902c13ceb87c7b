//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{session::Session, user::User};
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by username (exact match)
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Persist a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find session by its token
    async fn find_by_token(&self, token_id: &str) -> AuthResult<Option<Session>>;

    /// Find the user's most recent session row, expired or not. Login
    /// inspects expiry itself so a stale leftover row can be reaped.
    async fn find_latest_by_user(&self, user_id: &UserId) -> AuthResult<Option<Session>>;

    /// Delete a session. Deleting an absent token is a no-op.
    async fn delete(&self, token_id: &str) -> AuthResult<()>;

    /// Delete all expired sessions, returning how many were removed
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
