//! Log Out Use Case
//!
//! Invalidates a session by deleting its row. Deletion itself is
//! idempotent; naming a token the server does not hold is reported so the
//! HTTP layer can answer 403 the way the login flow's counterpart expects.

use std::sync::Arc;

use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Log out use case
pub struct LogOutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> LogOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<()> {
        let Some(session) = self.session_repo.find_by_token(token).await? else {
            return Err(AuthError::UnknownSession);
        };

        self.session_repo.delete(&session.token_id).await?;

        tracing::info!(user_id = %session.user_id, "User logged out");

        Ok(())
    }
}
