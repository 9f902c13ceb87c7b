//! Enrollment (Student Registration) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Self-service student registration against a class code
//! - Ordered validation with a distinct rejection reason per rule
//! - Capacity enforcement per classroom
//! - Username uniqueness across live accounts and pending registrations
//! - Name normalization with Filipino surname particles preserved
//!
//! Accepted registrations are pending; a teacher approves them into real
//! accounts through a separate flow.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{EnrollmentError, EnrollmentResult};
pub use infra::postgres::PgEnrollmentRepository;
pub use presentation::router::enrollment_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
