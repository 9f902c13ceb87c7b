//! HTTP Handlers

use axum::Json;
use axum::body::Body;
use axum::extract::{OriginalUri, Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::Response;
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::{SessionRepository, UserRepository};
use auth::require_identity;

use crate::application::config::FilesConfig;
use crate::application::{FetchFileUseCase, ListFilesUseCase};
use crate::domain::object_store::ObjectStore;
use crate::domain::repository::FileRepository;
use crate::error::{FilesError, FilesResult};
use crate::presentation::dto::{FileEntry, ListFilesResponse};

/// Shared state for files handlers
#[derive(Clone)]
pub struct FilesAppState<R, O, A>
where
    R: FileRepository + Clone + Send + Sync + 'static,
    O: ObjectStore + Clone + Send + Sync + 'static,
    A: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub store: Arc<O>,
    pub auth_repo: Arc<A>,
    pub auth_config: Arc<AuthConfig>,
    pub config: Arc<FilesConfig>,
}

// ============================================================================
// List Files
// ============================================================================

/// GET /api/files
///
/// Returns the files visible to the caller's classroom, each with an
/// absolute link built from the forwarded proto and host so links survive
/// a reverse proxy.
pub async fn list_files<R, O, A>(
    State(state): State<FilesAppState<R, O, A>>,
    headers: HeaderMap,
    OriginalUri(uri): OriginalUri,
) -> FilesResult<Json<ListFilesResponse>>
where
    R: FileRepository + Clone + Send + Sync + 'static,
    O: ObjectStore + Clone + Send + Sync + 'static,
    A: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let identity = require_identity(&headers, &state.auth_repo, &state.auth_config).await?;

    let use_case = ListFilesUseCase::new(state.repo.clone());
    let records = use_case.execute(&identity).await?;

    let base = link_base(&headers, uri.path());

    let files = records
        .into_iter()
        .map(|record| {
            let encoded = urlencoding::encode(&record.original_name).into_owned();
            FileEntry {
                file_link: format!("{base}/{encoded}"),
                file_name: record.original_name,
            }
        })
        .collect();

    Ok(Json(ListFilesResponse { files }))
}

/// Build `proto://host/path` from forwarding headers, falling back to
/// plain http and the Host header
fn link_base(headers: &HeaderMap, path: &str) -> String {
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    let path = path.trim_end_matches('/');

    format!("{proto}://{host}{path}")
}

// ============================================================================
// Fetch File
// ============================================================================

/// GET /api/files/{filename}
///
/// Streams the PDF inline; the body never touches server memory as a
/// whole.
pub async fn fetch_file<R, O, A>(
    State(state): State<FilesAppState<R, O, A>>,
    headers: HeaderMap,
    Path(filename): Path<String>,
) -> FilesResult<Response>
where
    R: FileRepository + Clone + Send + Sync + 'static,
    O: ObjectStore + Clone + Send + Sync + 'static,
    A: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let identity = require_identity(&headers, &state.auth_repo, &state.auth_config).await?;

    let use_case = FetchFileUseCase::new(
        state.repo.clone(),
        state.store.clone(),
        state.config.clone(),
    );

    let (record, stream) = use_case.execute(&identity, &filename).await?;

    let disposition = format!(
        "inline; filename=\"{}\"",
        record.original_name.replace('"', "")
    );

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(Body::from_stream(stream))
        .map_err(|e| FilesError::Internal(e.to_string()))
}
