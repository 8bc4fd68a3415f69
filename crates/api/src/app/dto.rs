use serde::Deserialize;

use bloglist_core::{Blog, BlogChanges, User};

// -------------------------
// Request DTOs
// -------------------------

/// Required fields are `Option` here so their absence surfaces as a 400
/// from validation, not as a body-deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub likes: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}

impl From<UpdateBlogRequest> for BlogChanges {
    fn from(req: UpdateBlogRequest) -> Self {
        Self {
            title: req.title,
            author: req.author,
            url: req.url,
            likes: req.likes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// Blog as returned by write paths: the owner stays a plain id.
pub fn blog_to_json(blog: &Blog) -> serde_json::Value {
    serde_json::json!({
        "id": blog.id.to_string(),
        "title": blog.title,
        "author": blog.author,
        "url": blog.url,
        "likes": blog.likes,
        "comments": blog.comments,
        "user": blog.user.to_string(),
    })
}

/// Blog as returned by read paths: the owner resolved to a projection
/// (`null` when the reference dangles).
pub fn blog_with_owner_to_json(blog: &Blog, owner: Option<&User>) -> serde_json::Value {
    serde_json::json!({
        "id": blog.id.to_string(),
        "title": blog.title,
        "author": blog.author,
        "url": blog.url,
        "likes": blog.likes,
        "comments": blog.comments,
        "user": owner.map(|u| serde_json::json!({
            "id": u.id.to_string(),
            "username": u.username,
            "name": u.name,
        })),
    })
}

/// User with the owned blogs resolved to projections. The password hash
/// never leaves the process.
pub fn user_to_json(user: &User, blogs: &[Blog]) -> serde_json::Value {
    serde_json::json!({
        "id": user.id.to_string(),
        "username": user.username,
        "name": user.name,
        "blogs": blogs.iter().map(|b| serde_json::json!({
            "id": b.id.to_string(),
            "title": b.title,
            "author": b.author,
            "url": b.url,
            "likes": b.likes,
        })).collect::<Vec<_>>(),
    })
}
