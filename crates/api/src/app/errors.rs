use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use bloglist_auth::AuthError;
use bloglist_core::DomainError;
use bloglist_store::StoreError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::BlogNotFound => json_error(StatusCode::NOT_FOUND, "not_found", "blog not found"),
        StoreError::UserNotFound => json_error(StatusCode::NOT_FOUND, "not_found", "user not found"),
        StoreError::UsernameTaken => json_error(StatusCode::CONFLICT, "conflict", "username taken"),
        StoreError::Domain(e) => domain_error_to_response(e),
        StoreError::Backend(msg) => {
            tracing::error!("store failure: {msg}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg)
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::MissingToken | AuthError::InvalidToken | AuthError::InvalidCredentials => {
            json_error(StatusCode::UNAUTHORIZED, "unauthorized", err.to_string())
        }
        AuthError::Backend(msg) => {
            tracing::error!("credential backend failure: {msg}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "auth_error", msg)
        }
    }
}
