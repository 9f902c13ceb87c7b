//! File Access Entities

use chrono::{DateTime, Utc};
use kernel::id::{ClassroomId, FileRecordId, StudentInfoId};
use uuid::Uuid;

/// A student's membership in a classroom
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub student_info_id: StudentInfoId,
    pub user_id: Uuid,
    pub classroom_id: ClassroomId,
}

/// Metadata row for an uploaded file
///
/// `original_name` is what students see and request by; `storage_key` is
/// the object's name inside the bucket. Lookup is always scoped by
/// classroom, so the same original name can exist in two classrooms
/// without collision.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub file_id: FileRecordId,
    /// Uploading teacher
    pub user_id: Uuid,
    pub classroom_id: ClassroomId,
    pub bucket: String,
    pub storage_key: String,
    pub original_name: String,
    pub uploaded_at: DateTime<Utc>,
}
