use bloglist_core::UserId;

/// Authenticated caller for a request.
///
/// Inserted into request extensions by the bearer-auth middleware; present
/// on every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    user_id: UserId,
    username: String,
}

impl Caller {
    pub fn new(user_id: UserId, username: String) -> Self {
        Self { user_id, username }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
