use thiserror::Error;

use bloglist_core::DomainError;

/// Store-level failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("user not found")]
    UserNotFound,

    #[error("blog not found")]
    BlogNotFound,

    #[error("username taken")]
    UsernameTaken,

    /// A domain rule rejected the write (validation and the like).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Unexpected backend failure (e.g. a poisoned lock).
    #[error("store backend failure: {0}")]
    Backend(String),
}
