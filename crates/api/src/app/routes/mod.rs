use axum::{
    routing::{get, post, put},
    Router,
};

pub mod blogs;
pub mod login;
pub mod system;
pub mod users;

/// Routes open to unauthenticated callers.
pub fn public_router() -> Router {
    Router::new()
        .route("/api/blogs", get(blogs::list_blogs))
        .route("/api/blogs/:id", get(blogs::get_blog))
        .route("/api/blogs/:id/comment", post(blogs::append_comment))
        .route("/api/users", post(users::create_user).get(users::list_users))
        .route("/api/login", post(login::login))
}

/// Routes behind the bearer-token gate: blog field mutation.
pub fn protected_router() -> Router {
    Router::new()
        .route("/api/blogs", post(blogs::create_blog))
        .route("/api/blogs/:id", put(blogs::update_blog).delete(blogs::delete_blog))
}
