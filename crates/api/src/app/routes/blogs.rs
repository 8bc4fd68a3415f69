use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use bloglist_core::{BlogDraft, BlogId};
use bloglist_store::DocumentStore;

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::Caller;

pub async fn list_blogs(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let blogs = match services.store().blogs() {
        Ok(blogs) => blogs,
        Err(e) => return errors::store_error_to_response(e),
    };

    let mut items = Vec::with_capacity(blogs.len());
    for blog in &blogs {
        let owner = match services.store().user(&blog.user) {
            Ok(owner) => owner,
            Err(e) => return errors::store_error_to_response(e),
        };
        if owner.is_none() {
            tracing::warn!(blog = %blog.id, "owning-user reference does not resolve");
        }
        items.push(dto::blog_with_owner_to_json(blog, owner.as_ref()));
    }

    (StatusCode::OK, Json(serde_json::Value::Array(items))).into_response()
}

pub async fn get_blog(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_blog_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let blog = match services.store().blog(&id) {
        Ok(Some(blog)) => blog,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "blog not found"),
        Err(e) => return errors::store_error_to_response(e),
    };

    let owner = match services.store().user(&blog.user) {
        Ok(owner) => owner,
        Err(e) => return errors::store_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(dto::blog_with_owner_to_json(&blog, owner.as_ref())),
    )
        .into_response()
}

pub async fn create_blog(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<Caller>,
    Json(body): Json<dto::CreateBlogRequest>,
) -> axum::response::Response {
    let draft = BlogDraft {
        title: body.title.unwrap_or_default(),
        author: body.author,
        url: body.url,
        likes: body.likes,
        owner: caller.user_id(),
    };

    match services.store().create_blog(draft) {
        Ok(blog) => {
            tracing::info!(blog = %blog.id, user = %caller.user_id(), "blog created");
            (StatusCode::CREATED, Json(dto::blog_to_json(&blog))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_blog(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateBlogRequest>,
) -> axum::response::Response {
    let id = match parse_blog_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if let Err(resp) = ensure_owned(services.store(), &id, &caller) {
        return resp;
    }

    match services.store().update_blog(&id, body.into()) {
        Ok(blog) => (StatusCode::OK, Json(dto::blog_to_json(&blog))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_blog(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_blog_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if let Err(resp) = ensure_owned(services.store(), &id, &caller) {
        return resp;
    }

    match services.store().delete_blog(&id) {
        Ok(blog) => {
            tracing::info!(blog = %blog.id, user = %caller.user_id(), "blog deleted");
            (StatusCode::OK, Json(dto::blog_to_json(&blog))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn append_comment(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::CommentRequest>,
) -> axum::response::Response {
    let id = match parse_blog_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services
        .store()
        .append_comment(&id, body.comment.unwrap_or_default())
    {
        Ok(blog) => (StatusCode::OK, Json(dto::blog_to_json(&blog))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

fn parse_blog_id(id: &str) -> Result<BlogId, axum::response::Response> {
    id.parse().map_err(errors::domain_error_to_response)
}

/// Fetch the blog and check the caller owns it. Ownership never changes
/// after creation, so this pre-check cannot race with the mutation that
/// follows it.
fn ensure_owned(
    store: &dyn DocumentStore,
    id: &BlogId,
    caller: &Caller,
) -> Result<(), axum::response::Response> {
    let blog = match store.blog(id) {
        Ok(Some(blog)) => blog,
        Ok(None) => {
            return Err(errors::json_error(
                StatusCode::NOT_FOUND,
                "not_found",
                "blog not found",
            ))
        }
        Err(e) => return Err(errors::store_error_to_response(e)),
    };

    if blog.user != caller.user_id() {
        return Err(errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "unauthorized",
        ));
    }
    Ok(())
}
