use thiserror::Error;

/// Authentication failure.
///
/// The first three variants are caller mistakes and map to 401 at the HTTP
/// boundary; `Backend` is an unexpected crypto/encoding failure and maps
/// to 500.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("token missing")]
    MissingToken,

    #[error("token invalid")]
    InvalidToken,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("credential backend failure: {0}")]
    Backend(String),
}
