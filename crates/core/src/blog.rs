//! Blog record: a post with comments and an owning-user reference.

use crate::error::{DomainError, DomainResult};
use crate::id::{BlogId, UserId};

/// Input for creating a blog. `owner` is stamped from the authenticated
/// caller by the API layer, never taken from the request body.
#[derive(Debug, Clone)]
pub struct BlogDraft {
    pub title: String,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: i64,
    pub owner: UserId,
}

/// Field replacements for an update. Fields left `None` are not touched.
#[derive(Debug, Clone, Default)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

/// A blog post.
///
/// # Invariants
/// - `title` is non-empty.
/// - `user` references the creating user and never changes; the owner's
///   `blogs` list contains this blog's id for as long as the blog lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: i64,
    pub comments: Vec<String>,
    pub user: UserId,
}

impl Blog {
    pub fn new(id: BlogId, draft: BlogDraft) -> DomainResult<Self> {
        if draft.title.trim().is_empty() {
            return Err(DomainError::validation("title is required"));
        }

        Ok(Self {
            id,
            title: draft.title,
            author: draft.author,
            url: draft.url,
            likes: draft.likes,
            comments: Vec::new(),
            user: draft.owner,
        })
    }

    /// Replace the updatable fields in place.
    pub fn apply_changes(&mut self, changes: BlogChanges) -> DomainResult<()> {
        if let Some(title) = changes.title {
            if title.trim().is_empty() {
                return Err(DomainError::validation("title is required"));
            }
            self.title = title;
        }
        if let Some(author) = changes.author {
            self.author = Some(author);
        }
        if let Some(url) = changes.url {
            self.url = Some(url);
        }
        if let Some(likes) = changes.likes {
            self.likes = likes;
        }
        Ok(())
    }

    /// Append a comment to the comment sequence.
    pub fn add_comment(&mut self, comment: String) -> DomainResult<()> {
        if comment.trim().is_empty() {
            return Err(DomainError::validation("comment is required"));
        }
        self.comments.push(comment);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> BlogDraft {
        BlogDraft {
            title: title.to_string(),
            author: Some("Author".to_string()),
            url: Some("https://example.com/".to_string()),
            likes: 0,
            owner: UserId::new(),
        }
    }

    #[test]
    fn new_blog_carries_the_draft_fields() {
        let owner = UserId::new();
        let blog = Blog::new(
            BlogId::new(),
            BlogDraft {
                owner,
                ..draft("First post")
            },
        )
        .unwrap();

        assert_eq!(blog.title, "First post");
        assert_eq!(blog.likes, 0);
        assert_eq!(blog.user, owner);
        assert!(blog.comments.is_empty());
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = Blog::new(BlogId::new(), draft("   ")).unwrap_err();
        assert_eq!(err, DomainError::validation("title is required"));
    }

    #[test]
    fn apply_changes_replaces_only_present_fields() {
        let mut blog = Blog::new(BlogId::new(), draft("First post")).unwrap();

        blog.apply_changes(BlogChanges {
            likes: Some(7),
            ..BlogChanges::default()
        })
        .unwrap();

        assert_eq!(blog.likes, 7);
        assert_eq!(blog.title, "First post");
        assert_eq!(blog.author.as_deref(), Some("Author"));
    }

    #[test]
    fn apply_changes_rejects_a_blank_title() {
        let mut blog = Blog::new(BlogId::new(), draft("First post")).unwrap();

        let err = blog
            .apply_changes(BlogChanges {
                title: Some(String::new()),
                ..BlogChanges::default()
            })
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(blog.title, "First post");
    }

    #[test]
    fn comments_append_in_order() {
        let mut blog = Blog::new(BlogId::new(), draft("First post")).unwrap();

        blog.add_comment("nice".to_string()).unwrap();
        blog.add_comment("very nice".to_string()).unwrap();

        assert_eq!(blog.comments, vec!["nice", "very nice"]);
    }

    #[test]
    fn empty_comment_is_rejected() {
        let mut blog = Blog::new(BlogId::new(), draft("First post")).unwrap();
        assert!(blog.add_comment("  ".to_string()).is_err());
        assert!(blog.comments.is_empty());
    }
}
