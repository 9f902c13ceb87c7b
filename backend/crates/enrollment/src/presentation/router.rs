//! Enrollment Router

use axum::{Router, routing::post};
use std::sync::Arc;

use platform::password::CredentialHasher;

use crate::domain::repository::EnrollmentRepository;
use crate::infra::postgres::PgEnrollmentRepository;
use crate::presentation::handlers::{self, EnrollmentAppState};

/// Create the Enrollment router with PostgreSQL repository
pub fn enrollment_router(repo: PgEnrollmentRepository) -> Router {
    enrollment_router_generic(repo)
}

/// Create a generic Enrollment router for any repository implementation
pub fn enrollment_router_generic<R>(repo: R) -> Router
where
    R: EnrollmentRepository + Clone + Send + Sync + 'static,
{
    let state = EnrollmentAppState {
        repo: Arc::new(repo),
        hasher: Arc::new(CredentialHasher::new()),
    };

    Router::new()
        .route("/", post(handlers::register::<R>))
        .with_state(state)
}
