//! Enrollment Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Enrollment-specific result type alias
pub type EnrollmentResult<T> = Result<T, EnrollmentError>;

/// Enrollment-specific error variants
///
/// Each validation rule fails with its own variant so a rejected applicant
/// learns exactly which rule to fix.
#[derive(Debug, Error)]
pub enum EnrollmentError {
    /// A required field is missing or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// LRN is not exactly 12 digits
    #[error("LRN must be exactly 12 digits")]
    InvalidLrn,

    /// Unrecognized sex code
    #[error("Sex must be 'male' or 'female'")]
    InvalidGender,

    /// Password violates the input policy
    #[error("Password validation failed: {0}")]
    InvalidPassword(String),

    /// Class code does not resolve to an open classroom
    #[error("Class code not found")]
    UnknownClassCode,

    /// Classroom is at capacity
    #[error("This class is already full")]
    ClassroomFull,

    /// Username is taken by a live account or a pending registration
    #[error("This LRN is already registered")]
    UsernameTaken,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EnrollmentError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            EnrollmentError::MissingField(_)
            | EnrollmentError::InvalidLrn
            | EnrollmentError::InvalidGender
            | EnrollmentError::InvalidPassword(_)
            | EnrollmentError::UnknownClassCode
            | EnrollmentError::ClassroomFull => StatusCode::BAD_REQUEST,
            EnrollmentError::UsernameTaken => StatusCode::CONFLICT,
            EnrollmentError::Database(_) | EnrollmentError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnrollmentError::MissingField(_)
            | EnrollmentError::InvalidLrn
            | EnrollmentError::InvalidGender
            | EnrollmentError::InvalidPassword(_)
            | EnrollmentError::UnknownClassCode
            | EnrollmentError::ClassroomFull => ErrorKind::BadRequest,
            EnrollmentError::UsernameTaken => ErrorKind::Conflict,
            EnrollmentError::Database(_) | EnrollmentError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            EnrollmentError::Database(e) => {
                tracing::error!(error = %e, "Enrollment database error");
            }
            EnrollmentError::Internal(msg) => {
                tracing::error!(message = %msg, "Enrollment internal error");
            }
            EnrollmentError::UsernameTaken => {
                tracing::warn!("Registration with a username already in use");
            }
            _ => {
                tracing::debug!(error = %self, "Enrollment rejection");
            }
        }
    }
}

impl IntoResponse for EnrollmentError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
