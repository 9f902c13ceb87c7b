//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::extract::Payload;
use platform::cookie;
use platform::password::CredentialHasher;

use crate::application::config::AuthConfig;
use crate::application::{CheckSessionUseCase, LogInInput, LogInUseCase, LogOutUseCase};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LogInRequest, LogInResponse, LogOutResponse, SessionStatusResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub hasher: Arc<CredentialHasher>,
}

// ============================================================================
// Log In
// ============================================================================

/// POST /api/auth/login
pub async fn log_in<R>(
    State(state): State<AuthAppState<R>>,
    Payload(req): Payload<LogInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.hasher.clone(),
        state.config.clone(),
    );

    let input = LogInInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = state
        .config
        .cookie
        .build_set_cookie(&output.token, state.config.session_ttl_secs());

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LogInResponse {
            message: "Logged in successfully".to_string(),
        }),
    ))
}

// ============================================================================
// Log Out
// ============================================================================

/// POST /api/auth/logout
pub async fn log_out<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    // 400 when no cookies at all, 401 when cookies lack the session
    // cookie, 403 when the named session is unknown.
    if !cookie::has_cookie_header(&headers) {
        return Err(AuthError::NoCookie);
    }

    let token = cookie::extract_cookie(&headers, &state.config.cookie.name)
        .ok_or(AuthError::MissingSessionCookie)?;

    let use_case = LogOutUseCase::new(state.repo.clone());
    use_case.execute(&token).await?;

    let cookie = state.config.cookie.build_clear_cookie();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LogOutResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/status
///
/// Never fails on auth grounds; an invalid or absent session reports
/// `authenticated: false`.
pub async fn session_status<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<SessionStatusResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = cookie::extract_cookie(&headers, &state.config.cookie.name);

    let identity = match token {
        Some(token) => {
            let use_case = CheckSessionUseCase::new(state.repo.clone(), state.repo.clone());
            match use_case.execute(&token).await {
                Ok(identity) => Some(identity),
                Err(AuthError::SessionInvalid) => None,
                Err(e) => return Err(e),
            }
        }
        None => None,
    };

    match identity {
        Some(identity) => Ok(Json(SessionStatusResponse {
            authenticated: true,
            username: Some(identity.username),
            role: Some(identity.role.to_string()),
            expires_at: Some(identity.expires_at),
        })),
        None => Ok(Json(SessionStatusResponse {
            authenticated: false,
            username: None,
            role: None,
            expires_at: None,
        })),
    }
}
