//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password missing from the request
    #[error("Username and password are required")]
    MissingCredentials,

    /// Password violates the input policy (too long, control characters)
    #[error("Password validation failed: {0}")]
    MalformedPassword(String),

    /// Unknown username or wrong password (deliberately indistinguishable)
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Login endpoint is restricted to student accounts
    #[error("This login is for students only")]
    StudentOnly,

    /// Account has been archived
    #[error("Account is disabled")]
    AccountDisabled,

    /// User already holds a live session
    #[error("Already logged in")]
    AlreadyLoggedIn,

    /// Request carried no Cookie header at all
    #[error("No cookies sent with the request")]
    NoCookie,

    /// Cookies were sent but none of them is the session cookie
    #[error("No session cookie found")]
    MissingSessionCookie,

    /// Session not found or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Logout named a session the server does not hold
    #[error("Invalid session")]
    UnknownSession,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredentials
            | AuthError::MalformedPassword(_)
            | AuthError::NoCookie => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials
            | AuthError::StudentOnly
            | AuthError::MissingSessionCookie
            | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::AccountDisabled | AuthError::UnknownSession => StatusCode::FORBIDDEN,
            AuthError::AlreadyLoggedIn => StatusCode::CONFLICT,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials
            | AuthError::MalformedPassword(_)
            | AuthError::NoCookie => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::StudentOnly
            | AuthError::MissingSessionCookie
            | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::AccountDisabled | AuthError::UnknownSession => ErrorKind::Forbidden,
            AuthError::AlreadyLoggedIn => ErrorKind::Conflict,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    ///
    /// Never logs credentials, digests, salts, or token values.
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AlreadyLoggedIn => {
                tracing::warn!("Login attempt with a session already active");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
