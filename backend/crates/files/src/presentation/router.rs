//! Files Router

use axum::{Router, routing::get};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::{SessionRepository, UserRepository};
use auth::infra::postgres::PgAuthRepository;

use crate::application::config::FilesConfig;
use crate::domain::object_store::ObjectStore;
use crate::domain::repository::FileRepository;
use crate::infra::postgres::PgFileRepository;
use crate::infra::s3::S3ObjectStore;
use crate::presentation::handlers::{self, FilesAppState};

/// Create the Files router with PostgreSQL and S3 backends
pub fn files_router(
    repo: PgFileRepository,
    store: S3ObjectStore,
    auth_repo: PgAuthRepository,
    auth_config: AuthConfig,
    config: FilesConfig,
) -> Router {
    files_router_generic(repo, store, auth_repo, auth_config, config)
}

/// Create a generic Files router for any backend implementations
pub fn files_router_generic<R, O, A>(
    repo: R,
    store: O,
    auth_repo: A,
    auth_config: AuthConfig,
    config: FilesConfig,
) -> Router
where
    R: FileRepository + Clone + Send + Sync + 'static,
    O: ObjectStore + Clone + Send + Sync + 'static,
    A: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = FilesAppState {
        repo: Arc::new(repo),
        store: Arc::new(store),
        auth_repo: Arc::new(auth_repo),
        auth_config: Arc::new(auth_config),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::list_files::<R, O, A>))
        .route("/{filename}", get(handlers::fetch_file::<R, O, A>))
        .with_state(state)
}
