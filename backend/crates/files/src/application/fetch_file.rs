//! Fetch File Use Case
//!
//! Walks the full access chain for one file:
//! identity -> enrollment -> classroom-scoped file record -> stored object.
//! The object is confirmed to exist before the body stream is opened, so
//! a dangling metadata row answers 404 rather than a broken stream.

use std::sync::Arc;

use auth::SessionIdentity;
use tokio::time::timeout;

use crate::application::config::FilesConfig;
use crate::domain::entity::FileRecord;
use crate::domain::object_store::{ByteStream, ObjectStore};
use crate::domain::repository::FileRepository;
use crate::error::{FilesError, FilesResult};

/// Fetch file use case
pub struct FetchFileUseCase<R, O>
where
    R: FileRepository,
    O: ObjectStore,
{
    repo: Arc<R>,
    store: Arc<O>,
    config: Arc<FilesConfig>,
}

impl<R, O> FetchFileUseCase<R, O>
where
    R: FileRepository,
    O: ObjectStore,
{
    pub fn new(repo: Arc<R>, store: Arc<O>, config: Arc<FilesConfig>) -> Self {
        Self {
            repo,
            store,
            config,
        }
    }

    pub async fn execute(
        &self,
        identity: &SessionIdentity,
        requested_name: &str,
    ) -> FilesResult<(FileRecord, ByteStream)> {
        let enrollment = self
            .repo
            .find_enrollment_by_user(*identity.user_id.as_uuid())
            .await?
            .ok_or(FilesError::NoEnrollment)?;

        let record = self
            .repo
            .find_file_in_classroom(&enrollment.classroom_id, requested_name)
            .await?
            .ok_or(FilesError::FileNotFound)?;

        let exists = timeout(
            self.config.storage_timeout,
            self.store.exists(&record.bucket, &record.storage_key),
        )
        .await
        .map_err(|_| FilesError::StorageUnavailable("existence check timed out".to_string()))??;

        if !exists {
            // Metadata row without a backing object
            tracing::warn!(file_id = %record.file_id, "File record has no stored object");
            return Err(FilesError::FileNotFound);
        }

        let stream = timeout(
            self.config.storage_timeout,
            self.store.get(&record.bucket, &record.storage_key),
        )
        .await
        .map_err(|_| FilesError::StorageUnavailable("object fetch timed out".to_string()))??;

        tracing::info!(
            user_id = %identity.user_id,
            file_id = %record.file_id,
            "File fetched"
        );

        Ok((record, stream))
    }
}
