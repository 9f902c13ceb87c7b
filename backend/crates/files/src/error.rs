//! Files Error Types

use auth::AuthError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Files-specific result type alias
pub type FilesResult<T> = Result<T, FilesError>;

/// Files-specific error variants
#[derive(Debug, Error)]
pub enum FilesError {
    /// Session resolution failed; keeps the auth error ladder intact
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Authenticated user has no classroom enrollment
    #[error("No student record found")]
    NoEnrollment,

    /// No file record with that name in the user's classroom, or the
    /// stored object is gone
    #[error("File not found")]
    FileNotFound,

    /// Object storage unreachable or timed out
    #[error("File storage is unavailable")]
    StorageUnavailable(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FilesError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            FilesError::Auth(e) => e.status_code(),
            FilesError::NoEnrollment => StatusCode::UNAUTHORIZED,
            FilesError::FileNotFound => StatusCode::NOT_FOUND,
            FilesError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            FilesError::Database(_) | FilesError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FilesError::Auth(e) => e.kind(),
            FilesError::NoEnrollment => ErrorKind::Unauthorized,
            FilesError::FileNotFound => ErrorKind::NotFound,
            FilesError::StorageUnavailable(_) => ErrorKind::ServiceUnavailable,
            FilesError::Database(_) | FilesError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            FilesError::Database(e) => {
                tracing::error!(error = %e, "Files database error");
            }
            FilesError::Internal(msg) => {
                tracing::error!(message = %msg, "Files internal error");
            }
            FilesError::StorageUnavailable(detail) => {
                tracing::error!(detail = %detail, "Object storage unavailable");
            }
            _ => {
                tracing::debug!(error = %self, "Files access denied");
            }
        }
    }
}

impl IntoResponse for FilesError {
    fn into_response(self) -> Response {
        match self {
            // Let auth errors keep their own logging and status ladder
            FilesError::Auth(e) => e.into_response(),
            other => {
                other.log();
                other.to_app_error().into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            FilesError::NoEnrollment.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(FilesError::FileNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            FilesError::StorageUnavailable("timeout".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            FilesError::Auth(AuthError::NoCookie).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
