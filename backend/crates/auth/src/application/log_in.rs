//! Log In Use Case
//!
//! Authenticates a student and creates a session.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::password::{ClearTextPassword, CredentialHasher, PasswordPolicyError};

use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Log in input
pub struct LogInInput {
    pub username: String,
    pub password: String,
}

/// Log in output
#[derive(Debug)]
pub struct LogInOutput {
    /// Session token for cookie
    pub token: String,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// Log in use case
pub struct LogInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    hasher: Arc<CredentialHasher>,
    config: Arc<AuthConfig>,
}

impl<U, S> LogInUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        session_repo: Arc<S>,
        hasher: Arc<CredentialHasher>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            session_repo,
            hasher,
            config,
        }
    }

    pub async fn execute(&self, input: LogInInput) -> AuthResult<LogInOutput> {
        if input.username.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let username =
            UserName::new(&input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::new(input.password).map_err(|e| match e {
            PasswordPolicyError::Empty => AuthError::MissingCredentials,
            other => AuthError::MalformedPassword(other.to_string()),
        })?;

        let Some(user) = self.user_repo.find_by_username(&username).await? else {
            // Burn one full-cost hash so an unknown username takes as long
            // as a known one with a wrong password.
            self.hasher.burn();
            return Err(AuthError::InvalidCredentials);
        };

        if !user.role.is_student() {
            return Err(AuthError::StudentOnly);
        }

        if !user.can_log_in() {
            return Err(AuthError::AccountDisabled);
        }

        if !self.hasher.verify(&user.password_digest, &password) {
            return Err(AuthError::InvalidCredentials);
        }

        // One live session per user. An expired leftover row does not block
        // re-login; it is removed here.
        if let Some(existing) = self.session_repo.find_latest_by_user(&user.user_id).await? {
            if existing.is_expired() {
                self.session_repo.delete(&existing.token_id).await?;
            } else {
                return Err(AuthError::AlreadyLoggedIn);
            }
        }

        let session = Session::new(user.user_id, self.config.session_ttl);
        self.session_repo.create(&session).await?;

        tracing::info!(user_id = %user.user_id, "Student logged in");

        Ok(LogInOutput {
            token: session.token_id,
            username: user.username.as_str().to_owned(),
            expires_at: session.expires_at,
        })
    }
}
