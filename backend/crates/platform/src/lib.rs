//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Credential hashing (Argon2id with fixed cost parameters)
//! - CSPRNG token generation for opaque bearer tokens
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
