pub mod config;
pub mod fetch_file;
pub mod list_files;

pub use fetch_file::FetchFileUseCase;
pub use list_files::ListFilesUseCase;
