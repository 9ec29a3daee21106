//! Password hashing and verification
//!
//! Argon2id with per-call random salts, producing PHC strings that
//! embed the algorithm, parameters, and salt. Verification recomputes
//! from the embedded parameters; a malformed stored hash is a
//! verification failure, never a panic. Plaintext passwords and hash
//! blobs must not appear in logs or responses.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum CredentialError {
    #[error("Hashing error: {0}")]
    Hashing(String),
}

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CredentialError::Hashing(e.to_string()))?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC hash string.
///
/// Returns false on any mismatch, including a stored hash that does
/// not parse.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        tracing::warn!("Stored password hash is malformed; treating as verification failure");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        // Given a password
        let password = "correct horse battery staple";

        // When hashing and verifying the same password
        let hash = hash_password(password).expect("hashing should succeed");

        // Then verification succeeds
        assert!(verify_password(password, &hash));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("abcdef").expect("hashing should succeed");
        assert!(!verify_password("abcdeg", &hash));
        assert!(!verify_password("", &hash));
        assert!(!verify_password("abcdef ", &hash));
    }

    #[test]
    fn test_malformed_hash_is_failure_not_panic() {
        for malformed in [
            "",
            "plaintext",
            "$argon2id$broken",
            "$2b$12$notargon2attement",
        ] {
            assert!(
                !verify_password("abcdef", malformed),
                "malformed hash {malformed:?} must fail verification"
            );
        }
    }

    #[test]
    fn test_hash_output_is_phc_format() {
        let hash = hash_password("abcdef").expect("hashing should succeed");
        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("abcdef"));
    }

    #[test]
    fn test_salts_differ_per_call() {
        // Hashing the same password twice embeds different salts
        let h1 = hash_password("abcdef").expect("hashing should succeed");
        let h2 = hash_password("abcdef").expect("hashing should succeed");
        assert_ne!(h1, h2);

        // Both still verify
        assert!(verify_password("abcdef", &h1));
        assert!(verify_password("abcdef", &h2));
    }

    #[test]
    fn test_unicode_passwords_round_trip() {
        for password in ["päss wörd", "пароль123", "密碼密碼"] {
            let hash = hash_password(password).expect("hashing should succeed");
            assert!(verify_password(password, &hash));
            assert!(!verify_password("abcdef", &hash));
        }
    }
}
