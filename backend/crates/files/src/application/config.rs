//! Application Configuration

use std::time::Duration;

/// Files application configuration
#[derive(Debug, Clone)]
pub struct FilesConfig {
    /// Upper bound on any single object store call. Storage never sits
    /// inside a database transaction, so a slow store only stalls its own
    /// request.
    pub storage_timeout: Duration,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            storage_timeout: Duration::from_secs(10),
        }
    }
}
