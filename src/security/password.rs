/// Password hashing and verification using Argon2id
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};

use crate::error::AppError;

/// Hash a password using Argon2id.
///
/// Returns a self-describing PHC digest (algorithm, parameters and salt are
/// embedded in the string). Only fails on an underlying hashing failure.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(rand::thread_rng());

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AppError::Hashing)
}

/// Verify a password against a stored digest.
///
/// Returns `false` for a wrong password and for a digest that does not parse
/// as a PHC string; a mismatch is never an error.
pub fn verify_password(password: &str, digest: &str) -> bool {
    match PasswordHash::new(digest) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "secret1";
        let digest = hash_password(password).unwrap();
        assert!(verify_password(password, &digest));
    }

    #[test]
    fn test_wrong_password() {
        let digest = hash_password("secret1").unwrap();
        assert!(!verify_password("secret2", &digest));
    }

    #[test]
    fn test_malformed_digest() {
        assert!(!verify_password("secret1", "not-a-phc-string"));
        assert!(!verify_password("secret1", ""));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("secret1").unwrap();
        let second = hash_password("secret1").unwrap();
        assert_ne!(first, second);
    }
}
