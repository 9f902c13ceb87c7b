//! Data Transfer Objects

use serde::Serialize;

/// One entry in the file listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub file_name: String,
    /// Absolute link to the fetch endpoint for this file
    pub file_link: String,
}

/// GET /api/files response
#[derive(Debug, Serialize)]
pub struct ListFilesResponse {
    pub files: Vec<FileEntry>,
}
