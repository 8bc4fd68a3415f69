//! `bloglist-auth` — authentication boundary for the bloglist service.
//!
//! Token claims, HS256 signing/verification, and password hashing.
//! This crate is intentionally decoupled from HTTP and storage.

pub mod claims;
pub mod error;
pub mod password;
pub mod token;

pub use claims::Claims;
pub use error::AuthError;
pub use password::{hash_password, verify_password, DUMMY_HASH};
pub use token::{Hs256TokenCodec, TokenVerifier};
