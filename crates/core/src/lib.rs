//! `bloglist-core` — domain model for the bloglist service.
//!
//! This crate contains **pure domain** types (no HTTP, no storage concerns):
//! strongly-typed identifiers, the `User` and `Blog` records, and the
//! domain error model.

pub mod blog;
pub mod error;
pub mod id;
pub mod user;

pub use blog::{Blog, BlogChanges, BlogDraft};
pub use error::{DomainError, DomainResult};
pub use id::{BlogId, UserId};
pub use user::{User, UserDraft};
