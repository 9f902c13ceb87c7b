//! Check Session Use Case
//!
//! Resolves a presented token to an identity. Expired or orphaned rows
//! are deleted lazily here, so a token that misses the store and a token
//! whose row has expired are indistinguishable to the caller.

use std::sync::Arc;

use crate::domain::entity::session::SessionIdentity;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
}

impl<U, S> CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>) -> Self {
        Self {
            user_repo,
            session_repo,
        }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<SessionIdentity> {
        let Some(session) = self.session_repo.find_by_token(token).await? else {
            return Err(AuthError::SessionInvalid);
        };

        if session.is_expired() {
            self.session_repo.delete(&session.token_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        let Some(user) = self.user_repo.find_by_id(&session.user_id).await? else {
            // Orphaned session (user row removed); drop it.
            self.session_repo.delete(&session.token_id).await?;
            return Err(AuthError::SessionInvalid);
        };

        if !user.can_log_in() {
            return Err(AuthError::SessionInvalid);
        }

        Ok(SessionIdentity {
            user_id: user.user_id,
            username: user.username.as_str().to_owned(),
            role: user.role,
            expires_at: session.expires_at,
        })
    }

    /// Validity probe that treats auth failures as `false` and propagates
    /// infrastructure errors
    pub async fn is_valid(&self, token: &str) -> AuthResult<bool> {
        match self.execute(token).await {
            Ok(_) => Ok(true),
            Err(AuthError::SessionInvalid) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
