use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use bloglist_auth::{AuthError, TokenVerifier};

use crate::app::errors;
use crate::context::Caller;

#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<dyn TokenVerifier>,
}

/// Bearer-token gate for mutating routes.
///
/// On success the decoded subject is attached to the request as a
/// [`Caller`]; any failure ends the request with 401.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let claims = match extract_bearer(req.headers()).and_then(|t| state.verifier.verify(t)) {
        Ok(claims) => claims,
        Err(e) => return errors::auth_error_to_response(e),
    };

    req.extensions_mut()
        .insert(Caller::new(claims.sub, claims.username));

    next.run(req).await
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?;

    let header = header.to_str().map_err(|_| AuthError::InvalidToken)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidToken)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}
