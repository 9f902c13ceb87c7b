pub mod entity;
pub mod object_store;
pub mod repository;
