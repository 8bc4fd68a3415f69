//! `bloglist-store` — the document store behind the bloglist API.
//!
//! [`DocumentStore`] is the persistence seam the HTTP layer talks to.
//! Besides plain per-document CRUD it owns the two compound operations
//! (create blog, delete blog) that must keep the owner's denormalized
//! blog-list in step with the blog collection; each runs as a single
//! atomic store call.

pub mod collection;
pub mod error;
pub mod memory;

use bloglist_core::{Blog, BlogChanges, BlogDraft, BlogId, User, UserDraft, UserId};

pub use collection::Collection;
pub use error::StoreError;
pub use memory::MemoryStore;

/// Document-store contract for users and blogs.
///
/// Reads return `Ok(None)` for absent documents; `Err` is reserved for
/// backend failures. Writes return the document as persisted.
pub trait DocumentStore: Send + Sync {
    /// Insert a new user. Fails with [`StoreError::UsernameTaken`] when the
    /// username is already present.
    fn create_user(&self, draft: UserDraft) -> Result<User, StoreError>;

    fn user(&self, id: &UserId) -> Result<Option<User>, StoreError>;

    fn user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    fn users(&self) -> Result<Vec<User>, StoreError>;

    fn blogs(&self) -> Result<Vec<Blog>, StoreError>;

    fn blog(&self, id: &BlogId) -> Result<Option<Blog>, StoreError>;

    /// Insert a new blog and append its id to the owner's blog-list, as one
    /// atomic operation. Fails with [`StoreError::UserNotFound`] when the
    /// owner does not exist.
    fn create_blog(&self, draft: BlogDraft) -> Result<Blog, StoreError>;

    /// Replace the updatable fields of a blog.
    fn update_blog(&self, id: &BlogId, changes: BlogChanges) -> Result<Blog, StoreError>;

    /// Remove a blog and drop its id from the owner's blog-list, as one
    /// atomic operation. Returns the deleted blog.
    fn delete_blog(&self, id: &BlogId) -> Result<Blog, StoreError>;

    /// Append one comment to a blog's comment sequence.
    fn append_comment(&self, id: &BlogId, comment: String) -> Result<Blog, StoreError>;
}
