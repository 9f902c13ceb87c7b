//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::ClassroomId;
use uuid::Uuid;

use crate::domain::entity::{Enrollment, FileRecord};
use crate::error::FilesResult;

/// File repository trait
#[trait_variant::make(FileRepository: Send)]
pub trait LocalFileRepository {
    /// Find the classroom enrollment for a user, if any
    async fn find_enrollment_by_user(&self, user_id: Uuid) -> FilesResult<Option<Enrollment>>;

    /// Find a file record by its original name, scoped to one classroom
    async fn find_file_in_classroom(
        &self,
        classroom_id: &ClassroomId,
        original_name: &str,
    ) -> FilesResult<Option<FileRecord>>;

    /// List all file records in a classroom, newest first
    async fn list_files_in_classroom(
        &self,
        classroom_id: &ClassroomId,
    ) -> FilesResult<Vec<FileRecord>>;
}
