//! Pending Registration Entity

use chrono::{DateTime, Utc};
use kernel::id::RegistrationId;
use uuid::Uuid;

use crate::domain::value_object::{gender::Gender, lrn::Lrn};

/// A registration awaiting teacher approval
///
/// Credential material is hashed before this entity exists; the clear
/// password never reaches the store. Approval copies the digest and salt
/// into a real user account unchanged.
#[derive(Debug, Clone)]
pub struct StudentRegistration {
    pub registration_id: RegistrationId,
    /// The LRN, which becomes the account username on approval
    pub lrn: Lrn,
    pub password_digest: String,
    pub salt: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub class_code: String,
    /// Teacher who owns the target classroom, denormalized for the
    /// approval queue
    pub teacher_id: Uuid,
    pub school_year: String,
    pub created_at: DateTime<Utc>,
}

impl StudentRegistration {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        lrn: Lrn,
        password_digest: String,
        salt: String,
        first_name: String,
        middle_name: String,
        last_name: String,
        gender: Gender,
        class_code: String,
        teacher_id: Uuid,
        school_year: String,
    ) -> Self {
        Self {
            registration_id: RegistrationId::new(),
            lrn,
            password_digest,
            salt,
            first_name,
            middle_name,
            last_name,
            gender,
            class_code,
            teacher_id,
            school_year,
            created_at: Utc::now(),
        }
    }
}
