//! HS256 token signing and verification.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::Claims;
use crate::error::AuthError;

/// Verify a bearer token and hand back its claims.
///
/// The HTTP layer holds this as a trait object so the codec stays
/// swappable in tests.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Claims, AuthError>;
}

/// HS256 codec over a shared secret. Signs and verifies.
pub struct Hs256TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Hs256TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No expiry leeway: an expired token is expired.
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| AuthError::Backend(e.to_string()))
    }
}

impl TokenVerifier for Hs256TokenCodec {
    fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        // Garbage, tampering, wrong key, expiry, missing subject: all of it
        // surfaces to the caller as one thing, an invalid token.
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloglist_core::UserId;
    use chrono::{Duration, Utc};

    fn claims_with_ttl(ttl: Duration) -> Claims {
        Claims::for_user(UserId::new(), "root", Utc::now(), ttl)
    }

    #[test]
    fn signed_token_verifies_and_preserves_the_subject() {
        let codec = Hs256TokenCodec::new(b"test-secret");
        let claims = claims_with_ttl(Duration::minutes(10));

        let token = codec.sign(&claims).unwrap();
        let decoded = codec.verify(&token).unwrap();

        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.username, "root");
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let signer = Hs256TokenCodec::new(b"one-secret");
        let verifier = Hs256TokenCodec::new(b"another-secret");

        let token = signer.sign(&claims_with_ttl(Duration::minutes(10))).unwrap();
        assert_eq!(verifier.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn expired_token_is_rejected() {
        let codec = Hs256TokenCodec::new(b"test-secret");
        let expired = Claims::for_user(
            UserId::new(),
            "root",
            Utc::now() - Duration::hours(2),
            Duration::hours(1),
        );

        let token = codec.sign(&expired).unwrap();
        assert_eq!(codec.verify(&token), Err(AuthError::InvalidToken));
    }

    #[test]
    fn garbage_is_rejected() {
        let codec = Hs256TokenCodec::new(b"test-secret");
        assert_eq!(codec.verify("not.a.token"), Err(AuthError::InvalidToken));
        assert_eq!(codec.verify(""), Err(AuthError::InvalidToken));
    }
}
