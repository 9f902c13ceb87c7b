//! Files (Classroom File Access) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository and object store traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and object storage implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Classroom-scoped file listing with absolute download links
//! - Streamed PDF fetch for inline viewing
//!
//! ## Access Model
//! Every request walks the full chain: session cookie to identity,
//! identity to classroom enrollment, requested name to a file record in
//! that classroom, record to the stored object. A miss anywhere denies
//! access; there is no direct-by-key fetch.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::FilesConfig;
pub use error::{FilesError, FilesResult};
pub use infra::postgres::PgFileRepository;
pub use infra::s3::S3ObjectStore;
pub use presentation::router::files_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
