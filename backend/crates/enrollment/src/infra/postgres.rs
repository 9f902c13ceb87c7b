//! PostgreSQL Repository Implementation

use kernel::id::ClassroomId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{classroom::Classroom, registration::StudentRegistration};
use crate::domain::repository::EnrollmentRepository;
use crate::domain::value_object::class_session::ClassSession;
use crate::error::{EnrollmentError, EnrollmentResult};

/// Postgres unique-violation code
const PG_UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed enrollment repository
#[derive(Clone)]
pub struct PgEnrollmentRepository {
    pool: PgPool,
}

impl PgEnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ClassroomRow {
    classroom_id: Uuid,
    teacher_id: Uuid,
    class_code: String,
    name: String,
    session: String,
    school_year: String,
    max_students: i32,
    archived: bool,
}

impl ClassroomRow {
    fn into_classroom(self) -> EnrollmentResult<Classroom> {
        let session = ClassSession::from_code(&self.session).ok_or_else(|| {
            EnrollmentError::Internal(format!("Unknown session code: {}", self.session))
        })?;

        Ok(Classroom {
            classroom_id: ClassroomId::from_uuid(self.classroom_id),
            teacher_id: self.teacher_id,
            class_code: self.class_code,
            name: self.name,
            session,
            school_year: self.school_year,
            max_students: self.max_students,
            archived: self.archived,
        })
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db) if db.code().as_deref() == Some(PG_UNIQUE_VIOLATION)
    )
}

// ============================================================================
// Enrollment Repository Implementation
// ============================================================================

impl EnrollmentRepository for PgEnrollmentRepository {
    async fn find_classroom_by_code(
        &self,
        class_code: &str,
    ) -> EnrollmentResult<Option<Classroom>> {
        let row = sqlx::query_as::<_, ClassroomRow>(
            r#"
            SELECT
                classroom_id,
                teacher_id,
                class_code,
                name,
                session,
                school_year,
                max_students,
                archived
            FROM classrooms
            WHERE class_code = $1
            "#,
        )
        .bind(class_code)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_classroom()).transpose()
    }

    async fn count_enrolled(&self, classroom_id: &ClassroomId) -> EnrollmentResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM students_info WHERE classroom_id = $1",
        )
        .bind(classroom_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn username_in_use(&self, username: &str) -> EnrollmentResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
                OR EXISTS(SELECT 1 FROM student_registrations WHERE username = $1)
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create_pending(&self, registration: &StudentRegistration) -> EnrollmentResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO student_registrations (
                registration_id,
                username,
                password_digest,
                salt,
                first_name,
                middle_name,
                last_name,
                gender,
                class_code,
                teacher_id,
                school_year,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(registration.registration_id.as_uuid())
        .bind(registration.lrn.as_str())
        .bind(&registration.password_digest)
        .bind(&registration.salt)
        .bind(&registration.first_name)
        .bind(&registration.middle_name)
        .bind(&registration.last_name)
        .bind(registration.gender.code())
        .bind(&registration.class_code)
        .bind(registration.teacher_id)
        .bind(&registration.school_year)
        .bind(registration.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // A concurrent registration with the same LRN lost the race to
            // the unique index; report it the same way the pre-check does.
            Err(e) if is_unique_violation(&e) => Err(EnrollmentError::UsernameTaken),
            Err(e) => Err(e.into()),
        }
    }
}
