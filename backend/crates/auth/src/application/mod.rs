pub mod check_session;
pub mod config;
pub mod log_in;
pub mod log_out;

pub use check_session::CheckSessionUseCase;
pub use log_in::{LogInInput, LogInOutput, LogInUseCase};
pub use log_out::LogOutUseCase;
