use thiserror::Error;

use crate::utils::UtilError;

/// Failures raised while extracting, verifying, or minting session and
/// CSRF tokens. The first five variants are the user-visible taxonomy;
/// the rest wrap mechanical faults from the crypto and header layers.
#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// No session cookie was presented at all. Distinct from a bad
    /// token: this is "never logged in", not "session went bad".
    #[error("No session cookie: may not set yet or deleted.")]
    SessionMissing,

    /// Signature verified but the expiry has passed.
    #[error("Session token has expired")]
    TokenExpired,

    /// Bad signature or structurally broken token.
    #[error("Invalid session token")]
    TokenInvalid,

    #[error("CSRF token missing")]
    CsrfMissing,

    #[error("Invalid CSRF token")]
    CsrfInvalid,

    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Header error: {0}")]
    HeaderError(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<SessionError>();
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SessionError::SessionMissing.to_string(),
            "No session cookie: may not set yet or deleted."
        );
        assert_eq!(
            SessionError::TokenExpired.to_string(),
            "Session token has expired"
        );
        assert_eq!(
            SessionError::TokenInvalid.to_string(),
            "Invalid session token"
        );
        assert_eq!(SessionError::CsrfMissing.to_string(), "CSRF token missing");
        assert_eq!(SessionError::CsrfInvalid.to_string(), "Invalid CSRF token");
    }

    #[test]
    fn test_from_util_error() {
        let util_err = UtilError::Crypto("rng failure".to_string());
        let err: SessionError = util_err.into();

        match err {
            SessionError::Utils(UtilError::Crypto(msg)) => {
                assert!(msg.contains("rng failure"));
            }
            _ => panic!("Expected Utils variant"),
        }
    }
}
