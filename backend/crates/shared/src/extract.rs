//! Strict Payload Extraction
//!
//! JSON payload extractor that maps every body-level failure (bad syntax,
//! wrong content type, type mismatch) to a single 400 "malformed input"
//! [`AppError`] before any field validation runs.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// JSON request payload
///
/// Drop-in replacement for `axum::Json` that rejects malformed bodies with
/// the application's unified error shape instead of axum's default rejection.
///
/// ## Examples
/// ```rust,ignore
/// async fn login(Payload(req): Payload<LoginRequest>) -> AppResult<()> { ... }
/// ```
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Payload(value)),
            Err(rejection) => Err(AppError::bad_request(
                "Malformed JSON. Please check your request body.",
            )
            .with_source(rejection)),
        }
    }
}
