//! Session Extraction
//!
//! The single entry point other route groups use to turn request headers
//! into an authenticated identity. Centralizing it keeps the cookie name,
//! the error ladder, and the lazy expiry deletion in one place.

use std::sync::Arc;

use axum::http::HeaderMap;
use platform::cookie;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::entity::session::SessionIdentity;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Resolve the request's session cookie to an identity
///
/// Error ladder:
/// - no Cookie header at all -> 400
/// - cookies present but no session cookie -> 401
/// - token unknown, expired, or orphaned -> 401
pub async fn require_identity<R>(
    headers: &HeaderMap,
    repo: &Arc<R>,
    config: &AuthConfig,
) -> AuthResult<SessionIdentity>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    if !cookie::has_cookie_header(headers) {
        return Err(AuthError::NoCookie);
    }

    let token = cookie::extract_cookie(headers, &config.cookie.name)
        .ok_or(AuthError::MissingSessionCookie)?;

    let use_case = CheckSessionUseCase::new(repo.clone(), repo.clone());
    use_case.execute(&token).await
}
