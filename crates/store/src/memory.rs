//! In-memory document store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use bloglist_core::{Blog, BlogChanges, BlogDraft, BlogId, User, UserDraft, UserId};

use crate::collection::Collection;
use crate::error::StoreError;
use crate::DocumentStore;

#[derive(Debug, Default, Clone)]
struct Tables {
    users: Collection<UserId, User>,
    blogs: Collection<BlogId, Blog>,
}

/// In-memory [`DocumentStore`].
///
/// One `RwLock` guards both collections. Reads share it; every write op
/// holds it exclusively for its whole sequence, so the compound
/// create/delete operations are atomic with respect to each other and
/// to readers. A poisoned lock surfaces as [`StoreError::Backend`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))
    }
}

impl DocumentStore for MemoryStore {
    fn create_user(&self, draft: UserDraft) -> Result<User, StoreError> {
        let mut tables = self.write()?;

        if tables.users.find(|u| u.username == draft.username).is_some() {
            return Err(StoreError::UsernameTaken);
        }

        let user = User::new(UserId::new(), draft)?;
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn user(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        Ok(self.read()?.users.get(id).cloned())
    }

    fn user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.read()?.users.find(|u| u.username == username).cloned())
    }

    fn users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.read()?.users.all())
    }

    fn blogs(&self) -> Result<Vec<Blog>, StoreError> {
        Ok(self.read()?.blogs.all())
    }

    fn blog(&self, id: &BlogId) -> Result<Option<Blog>, StoreError> {
        Ok(self.read()?.blogs.get(id).cloned())
    }

    fn create_blog(&self, draft: BlogDraft) -> Result<Blog, StoreError> {
        let mut tables = self.write()?;

        let owner = draft.owner;
        let blog = Blog::new(BlogId::new(), draft)?;

        if tables.users.get(&owner).is_none() {
            return Err(StoreError::UserNotFound);
        }

        tables.blogs.insert(blog.id, blog.clone());
        if let Some(user) = tables.users.get_mut(&owner) {
            user.attach_blog(blog.id);
        }
        Ok(blog)
    }

    fn update_blog(&self, id: &BlogId, changes: BlogChanges) -> Result<Blog, StoreError> {
        let mut tables = self.write()?;

        let blog = tables.blogs.get_mut(id).ok_or(StoreError::BlogNotFound)?;
        blog.apply_changes(changes)?;
        Ok(blog.clone())
    }

    fn delete_blog(&self, id: &BlogId) -> Result<Blog, StoreError> {
        let mut tables = self.write()?;

        let blog = tables.blogs.remove(id).ok_or(StoreError::BlogNotFound)?;
        match tables.users.get_mut(&blog.user) {
            Some(owner) => owner.detach_blog(id),
            // The blog is gone either way; the dangling owner is only logged.
            None => tracing::warn!(blog = %id, "deleted a blog whose owner record is gone"),
        }
        Ok(blog)
    }

    fn append_comment(&self, id: &BlogId, comment: String) -> Result<Blog, StoreError> {
        let mut tables = self.write()?;

        let blog = tables.blogs.get_mut(id).ok_or(StoreError::BlogNotFound)?;
        blog.add_comment(comment)?;
        Ok(blog.clone())
    }
}
