//! HTTP API application wiring (axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: shared handles (document store + token codec)
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use bloglist_auth::Hs256TokenCodec;

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    let codec = Arc::new(Hs256TokenCodec::new(config.jwt_secret.as_bytes()));
    let auth_state = middleware::AuthState {
        verifier: codec.clone(),
    };

    let services = Arc::new(services::AppServices::in_memory(codec, config.token_ttl));

    // Blog field mutation sits behind the bearer-token gate; reads,
    // comments, registration and login are public.
    let protected = routes::protected_router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::public_router())
        .merge(protected)
        .layer(Extension(services))
}
