pub mod class_session;
pub mod gender;
pub mod lrn;
pub mod person_name;
