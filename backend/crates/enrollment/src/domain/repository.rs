//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::ClassroomId;

use crate::domain::entity::{classroom::Classroom, registration::StudentRegistration};
use crate::error::EnrollmentResult;

/// Enrollment repository trait
#[trait_variant::make(EnrollmentRepository: Send)]
pub trait LocalEnrollmentRepository {
    /// Resolve a class code to its classroom
    async fn find_classroom_by_code(&self, class_code: &str)
    -> EnrollmentResult<Option<Classroom>>;

    /// Count approved enrollments in a classroom. Pending registrations
    /// do not hold a seat; the cap is enforced against enrolled students
    /// only.
    async fn count_enrolled(&self, classroom_id: &ClassroomId) -> EnrollmentResult<i64>;

    /// Whether a username is taken by a live account or a pending
    /// registration
    async fn username_in_use(&self, username: &str) -> EnrollmentResult<bool>;

    /// Insert a pending registration atomically. A concurrent duplicate
    /// surfaces as `EnrollmentError::UsernameTaken` via the unique index.
    async fn create_pending(&self, registration: &StudentRegistration) -> EnrollmentResult<()>;
}
