//! Argon2id hashing and verification of API client secrets.
//!
//! Secrets are configured as PHC strings, so the algorithm parameters and
//! salt travel with each hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a client secret with Argon2id and a random salt.
pub fn hash_secret(secret: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(secret.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check that a configured hash is a well-formed PHC string.
pub fn parse_secret_hash(hash: &str) -> Result<(), argon2::password_hash::Error> {
    PasswordHash::new(hash).map(|_| ())
}

/// Verify a presented secret against a stored PHC hash.
///
/// `Ok(false)` on mismatch; `Err` only when the hash itself is unusable.
pub fn verify_secret(secret: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(secret.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_original_secret() {
        let hash = hash_secret("studio-secret").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_secret("studio-secret", &hash).unwrap());
    }

    #[test]
    fn wrong_secret_does_not_verify() {
        let hash = hash_secret("studio-secret").unwrap();
        assert!(!verify_secret("studio-secreT", &hash).unwrap());
    }

    #[test]
    fn same_secret_hashes_differently() {
        assert_ne!(hash_secret("pw").unwrap(), hash_secret("pw").unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(parse_secret_hash("plaintext").is_err());
        assert!(verify_secret("pw", "plaintext").is_err());
    }
}
