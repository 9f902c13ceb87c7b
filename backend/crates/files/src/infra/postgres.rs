//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{ClassroomId, FileRecordId, StudentInfoId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{Enrollment, FileRecord};
use crate::domain::repository::FileRepository;
use crate::error::FilesResult;

/// PostgreSQL-backed file repository
#[derive(Clone)]
pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct EnrollmentRow {
    student_info_id: Uuid,
    user_id: Uuid,
    classroom_id: Uuid,
}

impl EnrollmentRow {
    fn into_enrollment(self) -> Enrollment {
        Enrollment {
            student_info_id: StudentInfoId::from_uuid(self.student_info_id),
            user_id: self.user_id,
            classroom_id: ClassroomId::from_uuid(self.classroom_id),
        }
    }
}

#[derive(sqlx::FromRow)]
struct FileRow {
    file_id: Uuid,
    user_id: Uuid,
    classroom_id: Uuid,
    bucket: String,
    storage_key: String,
    original_name: String,
    uploaded_at: DateTime<Utc>,
}

impl FileRow {
    fn into_record(self) -> FileRecord {
        FileRecord {
            file_id: FileRecordId::from_uuid(self.file_id),
            user_id: self.user_id,
            classroom_id: ClassroomId::from_uuid(self.classroom_id),
            bucket: self.bucket,
            storage_key: self.storage_key,
            original_name: self.original_name,
            uploaded_at: self.uploaded_at,
        }
    }
}

// ============================================================================
// File Repository Implementation
// ============================================================================

impl FileRepository for PgFileRepository {
    async fn find_enrollment_by_user(&self, user_id: Uuid) -> FilesResult<Option<Enrollment>> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT student_info_id, user_id, classroom_id
            FROM students_info
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_enrollment()))
    }

    async fn find_file_in_classroom(
        &self,
        classroom_id: &ClassroomId,
        original_name: &str,
    ) -> FilesResult<Option<FileRecord>> {
        let row = sqlx::query_as::<_, FileRow>(
            r#"
            SELECT
                file_id,
                user_id,
                classroom_id,
                bucket,
                storage_key,
                original_name,
                uploaded_at
            FROM file_upload
            WHERE classroom_id = $1 AND original_name = $2
            "#,
        )
        .bind(classroom_id.as_uuid())
        .bind(original_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_record()))
    }

    async fn list_files_in_classroom(
        &self,
        classroom_id: &ClassroomId,
    ) -> FilesResult<Vec<FileRecord>> {
        let rows = sqlx::query_as::<_, FileRow>(
            r#"
            SELECT
                file_id,
                user_id,
                classroom_id,
                bucket,
                storage_key,
                original_name,
                uploaded_at
            FROM file_upload
            WHERE classroom_id = $1
            ORDER BY uploaded_at DESC
            "#,
        )
        .bind(classroom_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_record()).collect())
    }
}
