//! Token claims model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use bloglist_core::UserId;

/// Claims carried by a bearer token.
///
/// `iat`/`exp` are unix seconds on the wire, which is what standard JWT
/// validation expects. A token that decodes without a subject is rejected
/// at deserialization, so "claims lacking a subject" needs no extra check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user.
    pub sub: UserId,

    /// Username at issue time (informational; identity is `sub`).
    pub username: String,

    #[serde(rename = "iat", with = "chrono::serde::ts_seconds")]
    pub issued_at: DateTime<Utc>,

    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
}

impl Claims {
    pub fn for_user(
        user_id: UserId,
        username: impl Into<String>,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: user_id,
            username: username.into(),
            issued_at: now,
            expires_at: now + ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_serialize_as_unix_seconds() {
        let now = Utc::now();
        let claims = Claims::for_user(UserId::new(), "root", now, Duration::hours(1));

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["iat"].as_i64(), Some(now.timestamp()));
        assert_eq!(value["exp"].as_i64(), Some((now + Duration::hours(1)).timestamp()));
        assert!(value["sub"].is_string());
    }

    #[test]
    fn claims_round_trip_through_json() {
        let claims = Claims::for_user(UserId::new(), "root", Utc::now(), Duration::hours(1));
        let json = serde_json::to_string(&claims).unwrap();
        let back: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(back.sub, claims.sub);
        assert_eq!(back.username, claims.username);
        // Sub-second precision is dropped by the unix-seconds encoding.
        assert_eq!(back.issued_at.timestamp(), claims.issued_at.timestamp());
    }
}
