//! Use case tests against an in-memory store

use std::sync::{Arc, Mutex};

use kernel::id::ClassroomId;
use platform::password::CredentialHasher;
use uuid::Uuid;

use crate::application::{RegistrationInput, SubmitRegistrationUseCase};
use crate::domain::entity::{classroom::Classroom, registration::StudentRegistration};
use crate::domain::repository::EnrollmentRepository;
use crate::domain::value_object::class_session::ClassSession;
use crate::error::{EnrollmentError, EnrollmentResult};

#[derive(Clone, Default)]
struct MemStore {
    classrooms: Arc<Mutex<Vec<Classroom>>>,
    registrations: Arc<Mutex<Vec<StudentRegistration>>>,
    taken_usernames: Arc<Mutex<Vec<String>>>,
    approved_seats: Arc<Mutex<i64>>,
}

impl MemStore {
    fn add_classroom(&self, classroom: Classroom) {
        self.classrooms.lock().unwrap().push(classroom);
    }

    fn registration_count(&self) -> usize {
        self.registrations.lock().unwrap().len()
    }
}

impl EnrollmentRepository for MemStore {
    async fn find_classroom_by_code(
        &self,
        class_code: &str,
    ) -> EnrollmentResult<Option<Classroom>> {
        let classrooms = self.classrooms.lock().unwrap();
        Ok(classrooms.iter().find(|c| c.class_code == class_code).cloned())
    }

    async fn count_enrolled(&self, _classroom_id: &ClassroomId) -> EnrollmentResult<i64> {
        Ok(*self.approved_seats.lock().unwrap())
    }

    async fn username_in_use(&self, username: &str) -> EnrollmentResult<bool> {
        let taken = self.taken_usernames.lock().unwrap();
        let pending = self.registrations.lock().unwrap();
        Ok(taken.iter().any(|u| u == username)
            || pending.iter().any(|r| r.lrn.as_str() == username))
    }

    async fn create_pending(&self, registration: &StudentRegistration) -> EnrollmentResult<()> {
        let mut registrations = self.registrations.lock().unwrap();
        if registrations
            .iter()
            .any(|r| r.lrn.as_str() == registration.lrn.as_str())
        {
            return Err(EnrollmentError::UsernameTaken);
        }
        registrations.push(registration.clone());
        Ok(())
    }
}

fn classroom(class_code: &str, max_students: i32, archived: bool) -> Classroom {
    Classroom {
        classroom_id: ClassroomId::new(),
        teacher_id: Uuid::new_v4(),
        class_code: class_code.to_string(),
        name: "Mathematics 7".to_string(),
        session: ClassSession::Morning,
        school_year: "2025-2026".to_string(),
        max_students,
        archived,
    }
}

fn use_case(store: &MemStore) -> SubmitRegistrationUseCase<MemStore> {
    SubmitRegistrationUseCase::new(
        Arc::new(store.clone()),
        Arc::new(CredentialHasher::new()),
    )
}

fn input(lrn: &str, class_code: &str) -> RegistrationInput {
    RegistrationInput {
        lrn: lrn.to_string(),
        first_name: "juan".to_string(),
        middle_name: "DELA CRUZ".to_string(),
        last_name: "garcia".to_string(),
        gender: "male".to_string(),
        password: "ligtas na password".to_string(),
        class_code: class_code.to_string(),
        school_year: "2025-2026".to_string(),
    }
}

#[tokio::test]
async fn test_registration_accepted() {
    let store = MemStore::default();
    store.add_classroom(classroom("MATH-7A", 40, false));

    let output = use_case(&store)
        .execute(input("123456789012", "MATH-7A"))
        .await
        .unwrap();

    assert!(output.message.contains("Awaiting teacher approval"));
    assert_eq!(store.registration_count(), 1);

    let registrations = store.registrations.lock().unwrap();
    let reg = &registrations[0];

    // Names normalized, surname particles preserved
    assert_eq!(reg.first_name, "Juan");
    assert_eq!(reg.middle_name, "dela Cruz");
    assert_eq!(reg.last_name, "Garcia");

    // Password stored as an Argon2id digest, never in the clear
    assert!(reg.password_digest.starts_with("$argon2id$"));
    assert!(!reg.password_digest.contains("ligtas na password"));
    assert!(!reg.salt.is_empty());
}

#[tokio::test]
async fn test_missing_fields_rejected_first() {
    let store = MemStore::default();
    store.add_classroom(classroom("MATH-7A", 40, false));

    let mut bad = input("123456789012", "MATH-7A");
    bad.first_name = "   ".to_string();

    let err = use_case(&store).execute(bad).await.unwrap_err();
    assert!(matches!(err, EnrollmentError::MissingField("firstName")));
    assert_eq!(store.registration_count(), 0);
}

#[tokio::test]
async fn test_invalid_lrn_rejected() {
    let store = MemStore::default();
    store.add_classroom(classroom("MATH-7A", 40, false));

    let err = use_case(&store)
        .execute(input("12345", "MATH-7A"))
        .await
        .unwrap_err();
    assert!(matches!(err, EnrollmentError::InvalidLrn));

    let err = use_case(&store)
        .execute(input("12345678901a", "MATH-7A"))
        .await
        .unwrap_err();
    assert!(matches!(err, EnrollmentError::InvalidLrn));
}

#[tokio::test]
async fn test_invalid_gender_rejected() {
    let store = MemStore::default();
    store.add_classroom(classroom("MATH-7A", 40, false));

    let mut bad = input("123456789012", "MATH-7A");
    bad.gender = "other".to_string();

    let err = use_case(&store).execute(bad).await.unwrap_err();
    assert!(matches!(err, EnrollmentError::InvalidGender));
}

#[tokio::test]
async fn test_unknown_class_code_rejected() {
    let store = MemStore::default();

    let err = use_case(&store)
        .execute(input("123456789012", "WALA-7Z"))
        .await
        .unwrap_err();
    assert!(matches!(err, EnrollmentError::UnknownClassCode));
}

#[tokio::test]
async fn test_archived_classroom_looks_absent() {
    let store = MemStore::default();
    store.add_classroom(classroom("MATH-7A", 40, true));

    let err = use_case(&store)
        .execute(input("123456789012", "MATH-7A"))
        .await
        .unwrap_err();
    assert!(matches!(err, EnrollmentError::UnknownClassCode));
}

#[tokio::test]
async fn test_full_classroom_rejected() {
    let store = MemStore::default();
    store.add_classroom(classroom("MATH-7A", 1, false));
    *store.approved_seats.lock().unwrap() = 1;

    // Cap is strict: one seat, one enrolled student, no room left
    let err = use_case(&store)
        .execute(input("123456789012", "MATH-7A"))
        .await
        .unwrap_err();
    assert!(matches!(err, EnrollmentError::ClassroomFull));
    assert_eq!(store.registration_count(), 0);
}

#[tokio::test]
async fn test_pending_registrations_do_not_hold_seats() {
    let store = MemStore::default();
    store.add_classroom(classroom("MATH-7A", 1, false));

    // One free seat, no one enrolled yet: a second distinct applicant is
    // still accepted even though another registration is pending.
    use_case(&store)
        .execute(input("123456789012", "MATH-7A"))
        .await
        .unwrap();
    use_case(&store)
        .execute(input("210987654321", "MATH-7A"))
        .await
        .unwrap();

    assert_eq!(store.registration_count(), 2);
}

#[tokio::test]
async fn test_username_taken_by_live_account() {
    let store = MemStore::default();
    store.add_classroom(classroom("MATH-7A", 40, false));
    store
        .taken_usernames
        .lock()
        .unwrap()
        .push("123456789012".to_string());

    let err = use_case(&store)
        .execute(input("123456789012", "MATH-7A"))
        .await
        .unwrap_err();
    assert!(matches!(err, EnrollmentError::UsernameTaken));
}

#[tokio::test]
async fn test_username_taken_by_pending_registration() {
    let store = MemStore::default();
    store.add_classroom(classroom("MATH-7A", 40, false));

    use_case(&store)
        .execute(input("123456789012", "MATH-7A"))
        .await
        .unwrap();

    let err = use_case(&store)
        .execute(input("123456789012", "MATH-7A"))
        .await
        .unwrap_err();
    assert!(matches!(err, EnrollmentError::UsernameTaken));
    assert_eq!(store.registration_count(), 1);
}

#[tokio::test]
async fn test_salts_differ_across_registrations() {
    let store = MemStore::default();
    store.add_classroom(classroom("MATH-7A", 40, false));
    let uc = use_case(&store);

    uc.execute(input("123456789012", "MATH-7A")).await.unwrap();
    uc.execute(input("210987654321", "MATH-7A")).await.unwrap();

    let registrations = store.registrations.lock().unwrap();
    assert_ne!(registrations[0].salt, registrations[1].salt);
    assert_ne!(registrations[0].password_digest, registrations[1].password_digest);
}
