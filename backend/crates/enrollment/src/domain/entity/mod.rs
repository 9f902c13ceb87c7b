pub mod classroom;
pub mod registration;
