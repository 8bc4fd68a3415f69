use std::sync::Arc;

use chrono::Utc;

use bloglist_auth::{AuthError, Claims, Hs256TokenCodec};
use bloglist_core::User;
use bloglist_store::{DocumentStore, MemoryStore};

/// Shared service handles for request handlers.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn DocumentStore>,
    tokens: Arc<Hs256TokenCodec>,
    token_ttl: chrono::Duration,
}

impl AppServices {
    /// Wire up the in-memory store.
    pub fn in_memory(tokens: Arc<Hs256TokenCodec>, token_ttl: chrono::Duration) -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            tokens,
            token_ttl,
        }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    /// Mint a bearer token for a user who just proved their credentials.
    pub fn issue_token(&self, user: &User) -> Result<String, AuthError> {
        let claims = Claims::for_user(user.id, user.username.clone(), Utc::now(), self.token_ttl);
        self.tokens.sign(&claims)
    }
}
