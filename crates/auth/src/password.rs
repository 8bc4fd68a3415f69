//! Password hashing and verification (argon2id, PHC string format).

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

use crate::error::AuthError;

/// A well-formed argon2id hash of no password anyone will guess.
///
/// Login verifies against this when the username is unknown, so the
/// response time does not reveal whether an account exists.
pub const DUMMY_HASH: &str = "$argon2id$v=19$m=15000,t=2,p=1$\
    gZiV/M1gPc22ElAH/Jh1Hw$CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

/// Hash a password for storage. The PHC string embeds salt and parameters.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Backend(e.to_string()))?;
    Ok(hash.to_string())
}

/// Check a password against a stored PHC hash.
pub fn verify_password(password: &str, expected_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(expected_hash).map_err(|e| AuthError::Backend(e.to_string()))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|e| match e {
            argon2::password_hash::Error::Password => AuthError::InvalidCredentials,
            other => AuthError::Backend(other.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_password_verifies() {
        let hash = hash_password("sekret").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        verify_password("sekret", &hash).unwrap();
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let hash = hash_password("sekret").unwrap();
        assert_eq!(
            verify_password("wrong", &hash),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn two_hashes_of_the_same_password_differ() {
        // Fresh salt per hash.
        assert_ne!(hash_password("sekret").unwrap(), hash_password("sekret").unwrap());
    }

    #[test]
    fn dummy_hash_parses_and_rejects() {
        assert_eq!(
            verify_password("anything", DUMMY_HASH),
            Err(AuthError::InvalidCredentials)
        );
    }
}
