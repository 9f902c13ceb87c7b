//! Object Store Trait
//!
//! Interface over the blob backend (MinIO in deployment). Metadata lives
//! in Postgres; the store only ever answers "does this object exist" and
//! "give me its bytes".

use std::pin::Pin;

use bytes::Bytes;
use futures::Stream;

use crate::error::FilesResult;

/// A byte stream type used for reading object contents
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Object store trait
#[trait_variant::make(ObjectStore: Send)]
pub trait LocalObjectStore {
    /// Whether an object exists at `key` in `bucket`
    async fn exists(&self, bucket: &str, key: &str) -> FilesResult<bool>;

    /// Open the object's content as a stream
    async fn get(&self, bucket: &str, key: &str) -> FilesResult<ByteStream>;
}
