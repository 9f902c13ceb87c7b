//! S3-Compatible Object Store Implementation
//!
//! Speaks the S3 API against MinIO. Path-style addressing is forced
//! because MinIO serves buckets under the endpoint path rather than as
//! virtual hosts.

use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use tokio_util::io::ReaderStream;

use crate::domain::object_store::{ByteStream, ObjectStore};
use crate::error::{FilesError, FilesResult};

/// Connection settings for the object store
#[derive(Debug, Clone)]
pub struct S3Settings {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
}

/// S3-backed object store
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from explicit settings (static credentials, custom
    /// endpoint)
    pub fn from_settings(settings: &S3Settings) -> Self {
        let credentials = Credentials::new(
            settings.access_key.clone(),
            settings.secret_key.clone(),
            None,
            None,
            "static",
        );

        let config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .endpoint_url(settings.endpoint.clone())
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        tracing::info!(endpoint = %settings.endpoint, "Initialized object store client");

        Self::new(Client::from_conf(config))
    }
}

impl ObjectStore for S3ObjectStore {
    async fn exists(&self, bucket: &str, key: &str) -> FilesResult<bool> {
        match self
            .client
            .head_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_not_found() {
                    Ok(false)
                } else {
                    Err(FilesError::StorageUnavailable(service_err.to_string()))
                }
            }
        }
    }

    async fn get(&self, bucket: &str, key: &str) -> FilesResult<ByteStream> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| FilesError::StorageUnavailable(e.to_string()))?;

        let reader = output.body.into_async_read();
        Ok(Box::pin(ReaderStream::new(reader)))
    }
}
