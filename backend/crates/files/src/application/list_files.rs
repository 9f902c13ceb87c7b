//! List Files Use Case
//!
//! Lists the file records visible to an identity, which is exactly the
//! set in the classroom they are enrolled in. The store is not consulted;
//! the listing reflects metadata only.

use std::sync::Arc;

use auth::SessionIdentity;

use crate::domain::entity::FileRecord;
use crate::domain::repository::FileRepository;
use crate::error::{FilesError, FilesResult};

/// List files use case
pub struct ListFilesUseCase<R>
where
    R: FileRepository,
{
    repo: Arc<R>,
}

impl<R> ListFilesUseCase<R>
where
    R: FileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, identity: &SessionIdentity) -> FilesResult<Vec<FileRecord>> {
        let enrollment = self
            .repo
            .find_enrollment_by_user(*identity.user_id.as_uuid())
            .await?
            .ok_or(FilesError::NoEnrollment)?;

        self.repo
            .list_files_in_classroom(&enrollment.classroom_id)
            .await
    }
}
