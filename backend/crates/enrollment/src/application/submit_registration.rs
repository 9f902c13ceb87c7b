//! Submit Registration Use Case
//!
//! Validates a self-service registration and stores it as pending. Rules
//! run in a fixed order and the first failure wins, so the applicant sees
//! one specific reason at a time:
//!
//! 1. required fields present
//! 2. LRN shape (12 digits)
//! 3. sex and password well-formed
//! 4. class code resolves to an open classroom
//! 5. classroom has room under its cap
//! 6. username not already taken anywhere
//!
//! The final insert still races other applicants; the unique index is the
//! arbiter and a loser gets the same `UsernameTaken` answer as in step 6.

use std::sync::Arc;

use platform::password::{ClearTextPassword, CredentialHasher};

use crate::domain::entity::registration::StudentRegistration;
use crate::domain::repository::EnrollmentRepository;
use crate::domain::value_object::{
    gender::Gender,
    lrn::Lrn,
    person_name::{normalize_given_name, normalize_surname},
};
use crate::error::{EnrollmentError, EnrollmentResult};

/// Registration input
pub struct RegistrationInput {
    pub lrn: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub gender: String,
    pub password: String,
    pub class_code: String,
    pub school_year: String,
}

/// Registration output
#[derive(Debug)]
pub struct RegistrationOutput {
    pub message: String,
}

/// Submit registration use case
pub struct SubmitRegistrationUseCase<R>
where
    R: EnrollmentRepository,
{
    repo: Arc<R>,
    hasher: Arc<CredentialHasher>,
}

impl<R> SubmitRegistrationUseCase<R>
where
    R: EnrollmentRepository,
{
    pub fn new(repo: Arc<R>, hasher: Arc<CredentialHasher>) -> Self {
        Self { repo, hasher }
    }

    pub async fn execute(&self, input: RegistrationInput) -> EnrollmentResult<RegistrationOutput> {
        require_field(&input.lrn, "lrn")?;
        require_field(&input.first_name, "firstName")?;
        require_field(&input.last_name, "lastName")?;
        require_field(&input.gender, "sex")?;
        require_field(&input.password, "password")?;
        require_field(&input.class_code, "classCode")?;
        require_field(&input.school_year, "schoolYear")?;

        let lrn = Lrn::new(&input.lrn).ok_or(EnrollmentError::InvalidLrn)?;
        let gender = Gender::from_code(&input.gender).ok_or(EnrollmentError::InvalidGender)?;

        let password = ClearTextPassword::new(input.password)
            .map_err(|e| EnrollmentError::InvalidPassword(e.to_string()))?;

        let class_code = input.class_code.trim();
        let classroom = self
            .repo
            .find_classroom_by_code(class_code)
            .await?
            .ok_or(EnrollmentError::UnknownClassCode)?;

        // An archived classroom is indistinguishable from an absent one
        if !classroom.is_open() {
            return Err(EnrollmentError::UnknownClassCode);
        }

        let enrolled = self.repo.count_enrolled(&classroom.classroom_id).await?;
        if !classroom.has_room(enrolled) {
            return Err(EnrollmentError::ClassroomFull);
        }

        if self.repo.username_in_use(lrn.as_str()).await? {
            return Err(EnrollmentError::UsernameTaken);
        }

        let salt = self.hasher.generate_salt();
        let digest = self
            .hasher
            .hash(&password, &salt)
            .map_err(|e| EnrollmentError::Internal(e.to_string()))?;

        let registration = StudentRegistration::new(
            lrn,
            digest,
            salt,
            normalize_given_name(&input.first_name),
            normalize_surname(&input.middle_name),
            normalize_surname(&input.last_name),
            gender,
            classroom.class_code.clone(),
            classroom.teacher_id,
            input.school_year.trim().to_string(),
        );

        self.repo.create_pending(&registration).await?;

        tracing::info!(
            registration_id = %registration.registration_id,
            class_code = %registration.class_code,
            "Registration submitted"
        );

        Ok(RegistrationOutput {
            message: "Registration submitted. Awaiting teacher approval.".to_string(),
        })
    }
}

fn require_field(value: &str, name: &'static str) -> EnrollmentResult<()> {
    if value.trim().is_empty() {
        return Err(EnrollmentError::MissingField(name));
    }
    Ok(())
}
