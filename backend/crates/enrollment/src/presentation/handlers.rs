//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::extract::Payload;
use platform::password::CredentialHasher;

use crate::application::{RegistrationInput, SubmitRegistrationUseCase};
use crate::domain::repository::EnrollmentRepository;
use crate::error::EnrollmentResult;
use crate::presentation::dto::{RegisterRequest, RegisterResponse};

/// Shared state for enrollment handlers
#[derive(Clone)]
pub struct EnrollmentAppState<R>
where
    R: EnrollmentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub hasher: Arc<CredentialHasher>,
}

/// POST /api/register
pub async fn register<R>(
    State(state): State<EnrollmentAppState<R>>,
    Payload(req): Payload<RegisterRequest>,
) -> EnrollmentResult<impl IntoResponse>
where
    R: EnrollmentRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitRegistrationUseCase::new(state.repo.clone(), state.hasher.clone());

    let input = RegistrationInput {
        lrn: req.lrn,
        first_name: req.first_name,
        middle_name: req.middle_name,
        last_name: req.last_name,
        gender: req.sex,
        password: req.password,
        class_code: req.class_code,
        school_year: req.school_year,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: output.message,
        }),
    ))
}
