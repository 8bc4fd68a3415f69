//! User record: account identity plus the denormalized list of owned blogs.

use crate::error::{DomainError, DomainResult};
use crate::id::{BlogId, UserId};

/// Minimum length for a username.
pub const MIN_USERNAME_LEN: usize = 3;

/// Input for creating a user. The password is hashed before it gets here;
/// the plain text never reaches the domain layer.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub username: String,
    pub name: String,
    pub password_hash: String,
}

/// A registered user.
///
/// # Invariants
/// - `username` is unique across the store (enforced by the store) and at
///   least [`MIN_USERNAME_LEN`] characters (enforced here).
/// - `blogs` holds the ids of exactly the live blogs this user owns, in
///   creation order. The store keeps it in sync with blog creation/deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub blogs: Vec<BlogId>,
}

impl User {
    pub fn new(id: UserId, draft: UserDraft) -> DomainResult<Self> {
        if draft.username.trim().len() < MIN_USERNAME_LEN {
            return Err(DomainError::validation(format!(
                "username must be at least {MIN_USERNAME_LEN} characters"
            )));
        }

        Ok(Self {
            id,
            username: draft.username,
            name: draft.name,
            password_hash: draft.password_hash,
            blogs: Vec::new(),
        })
    }

    /// Record ownership of a newly created blog.
    pub fn attach_blog(&mut self, blog_id: BlogId) {
        self.blogs.push(blog_id);
    }

    /// Drop a deleted blog from the owned list. No-op if it was not there.
    pub fn detach_blog(&mut self, blog_id: &BlogId) {
        self.blogs.retain(|id| id != blog_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(username: &str) -> UserDraft {
        UserDraft {
            username: username.to_string(),
            name: "Test User".to_string(),
            password_hash: "$argon2id$stub".to_string(),
        }
    }

    #[test]
    fn new_user_starts_with_no_blogs() {
        let user = User::new(UserId::new(), draft("root")).unwrap();
        assert_eq!(user.username, "root");
        assert!(user.blogs.is_empty());
    }

    #[test]
    fn short_username_is_rejected() {
        let err = User::new(UserId::new(), draft("ab")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn whitespace_padding_does_not_satisfy_the_length_rule() {
        let err = User::new(UserId::new(), draft(" a ")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn attach_and_detach_keep_the_owned_list_in_order() {
        let mut user = User::new(UserId::new(), draft("root")).unwrap();
        let first = BlogId::new();
        let second = BlogId::new();

        user.attach_blog(first);
        user.attach_blog(second);
        assert_eq!(user.blogs, vec![first, second]);

        user.detach_blog(&first);
        assert_eq!(user.blogs, vec![second]);

        // Detaching an unknown id leaves the list alone.
        user.detach_blog(&BlogId::new());
        assert_eq!(user.blogs, vec![second]);
    }
}
