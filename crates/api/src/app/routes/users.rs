use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use bloglist_core::UserDraft;
use bloglist_store::DocumentStore;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Minimum length for a plain-text password at registration.
const MIN_PASSWORD_LEN: usize = 3;

pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateUserRequest>,
) -> axum::response::Response {
    let password = body.password.unwrap_or_default();
    if password.trim().len() < MIN_PASSWORD_LEN {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            format!("password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }

    let password_hash = match bloglist_auth::hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => return errors::auth_error_to_response(e),
    };

    let draft = UserDraft {
        username: body.username.unwrap_or_default(),
        name: body.name.unwrap_or_default(),
        password_hash,
    };

    match services.store().create_user(draft) {
        Ok(user) => {
            tracing::info!(user = %user.id, "user registered");
            (StatusCode::CREATED, Json(dto::user_to_json(&user, &[]))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let users = match services.store().users() {
        Ok(users) => users,
        Err(e) => return errors::store_error_to_response(e),
    };

    let mut items = Vec::with_capacity(users.len());
    for user in &users {
        let mut blogs = Vec::with_capacity(user.blogs.len());
        for id in &user.blogs {
            match services.store().blog(id) {
                Ok(Some(blog)) => blogs.push(blog),
                Ok(None) => tracing::warn!(user = %user.id, blog = %id, "blog-list entry does not resolve"),
                Err(e) => return errors::store_error_to_response(e),
            }
        }
        items.push(dto::user_to_json(user, &blogs));
    }

    (StatusCode::OK, Json(serde_json::Value::Array(items))).into_response()
}
