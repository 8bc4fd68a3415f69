use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use bloglist_auth::{verify_password, AuthError, DUMMY_HASH};
use bloglist_store::DocumentStore;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    let (username, password) = match (body.username, body.password) {
        (Some(username), Some(password)) => (username, password),
        _ => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                "username and password are required",
            )
        }
    };

    let user = match services.store().user_by_username(&username) {
        Ok(user) => user,
        Err(e) => return errors::store_error_to_response(e),
    };

    // Unknown usernames verify against a dummy hash so response timing
    // does not reveal whether the account exists.
    let expected = user
        .as_ref()
        .map(|u| u.password_hash.as_str())
        .unwrap_or(DUMMY_HASH);

    if let Err(e) = verify_password(&password, expected) {
        return match e {
            AuthError::InvalidCredentials => errors::json_error(
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "invalid username or password",
            ),
            other => errors::auth_error_to_response(other),
        };
    }

    let Some(user) = user else {
        return errors::json_error(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "invalid username or password",
        );
    };

    let token = match services.issue_token(&user) {
        Ok(token) => token,
        Err(e) => return errors::auth_error_to_response(e),
    };

    tracing::info!(user = %user.id, "login succeeded");
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "token": token,
            "username": user.username,
            "name": user.name,
        })),
    )
        .into_response()
}
