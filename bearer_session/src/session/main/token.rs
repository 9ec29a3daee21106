//! Session token codec
//!
//! Encodes a subject into a signed, expiry-bearing token string and
//! decodes it back, rejecting tampered or expired tokens. Tokens are
//! HS256-signed with the process-wide `AUTH_SERVER_SECRET` and carry no
//! server-side state; signature plus expiry are the whole truth.

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::session::config::{AUTH_SERVER_SECRET, SESSION_TOKEN_TTL};
use crate::session::errors::SessionError;
use crate::utils::gen_random_string;

/// Claims carried by a session token.
///
/// `jti` is a fresh random nonce per issuance, so two tokens minted for
/// the same subject in the same second are still distinct strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionClaims {
    /// Subject identity the token asserts (the account email).
    pub sub: String,
    /// Unix timestamp at issuance.
    pub iat: i64,
    /// Unix timestamp after which the token is rejected.
    pub exp: i64,
    /// Random nonce distinguishing otherwise identical issuances.
    pub jti: String,
}

impl SessionClaims {
    fn new(subject: &str) -> Result<Self, SessionError> {
        let now = Utc::now().timestamp();
        Ok(Self {
            sub: subject.to_string(),
            iat: now,
            exp: now + *SESSION_TOKEN_TTL as i64,
            jti: gen_random_string(16)?,
        })
    }
}

/// Mint a signed session token for `subject`, expiring `SESSION_TOKEN_TTL`
/// seconds from now.
pub fn encode_session_token(subject: &str) -> Result<String, SessionError> {
    let claims = SessionClaims::new(subject)?;
    encode_claims(&claims)
}

fn encode_claims(claims: &SessionClaims) -> Result<String, SessionError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(&AUTH_SERVER_SECRET),
    )
    .map_err(|e| SessionError::Crypto(e.to_string()))
}

/// Verify signature and expiry, returning the embedded claims.
///
/// A valid signature with a passed expiry is `TokenExpired`; every other
/// failure, including structural damage and signature mismatch, is
/// `TokenInvalid`. Expiry is checked with zero leeway.
pub fn decode_session_token(token: &str) -> Result<SessionClaims, SessionError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(&AUTH_SERVER_SECRET),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => SessionError::TokenExpired,
        _ => SessionError::TokenInvalid,
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_decode_round_trip() {
        // Given a subject
        let subject = "alice@example.com";

        // When encoding and immediately decoding
        let token = encode_session_token(subject).expect("encoding should succeed");
        let claims = decode_session_token(&token).expect("decoding should succeed");

        // Then the subject survives and the expiry window matches the TTL
        assert_eq!(claims.sub, subject);
        assert_eq!(claims.exp - claims.iat, *SESSION_TOKEN_TTL as i64);

        let now = Utc::now().timestamp();
        assert!(claims.iat <= now && now <= claims.iat + 2);
    }

    #[test]
    fn test_expired_token_fails_with_token_expired() {
        // Given a token whose expiry has already passed
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: "alice@example.com".to_string(),
            iat: now - 600,
            exp: now - 10,
            jti: gen_random_string(16).expect("rng should work"),
        };
        let token = encode_claims(&claims).expect("encoding should succeed");

        // When decoding
        let result = decode_session_token(&token);

        // Then the failure is TokenExpired, not TokenInvalid
        assert!(matches!(result, Err(SessionError::TokenExpired)));
    }

    #[test]
    fn test_foreign_secret_fails_with_token_invalid() {
        // Given a structurally correct token signed with a different secret
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: "alice@example.com".to_string(),
            iat: now,
            exp: now + 300,
            jti: "nonce".to_string(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"some-other-secret"),
        )
        .expect("encoding should succeed");

        // When decoding with the process secret
        let result = decode_session_token(&token);

        // Then the signature mismatch surfaces as TokenInvalid
        assert!(matches!(result, Err(SessionError::TokenInvalid)));
    }

    #[test]
    fn test_garbage_fails_with_token_invalid() {
        for garbage in ["", "not-a-token", "a.b", "a.b.c", "....."] {
            let result = decode_session_token(garbage);
            assert!(
                matches!(result, Err(SessionError::TokenInvalid)),
                "expected TokenInvalid for {garbage:?}"
            );
        }
    }

    #[test]
    fn test_tampered_payload_fails_with_token_invalid() {
        // Given a valid token with its payload segment swapped for another's
        let token_a = encode_session_token("alice@example.com").expect("encoding should succeed");
        let token_b = encode_session_token("mallory@example.com").expect("encoding should succeed");
        let parts_a: Vec<&str> = token_a.split('.').collect();
        let parts_b: Vec<&str> = token_b.split('.').collect();
        let spliced = format!("{}.{}.{}", parts_a[0], parts_b[1], parts_a[2]);

        // When decoding the spliced token
        let result = decode_session_token(&spliced);

        // Then the signature no longer covers the payload
        assert!(matches!(result, Err(SessionError::TokenInvalid)));
    }

    #[test]
    fn test_two_issuances_are_distinct() {
        // Two tokens for the same subject minted back to back must differ
        // even when the clock has not advanced between the calls.
        let t1 = encode_session_token("alice@example.com").expect("encoding should succeed");
        let t2 = encode_session_token("alice@example.com").expect("encoding should succeed");
        assert_ne!(t1, t2);

        let c1 = decode_session_token(&t1).expect("decoding should succeed");
        let c2 = decode_session_token(&t2).expect("decoding should succeed");
        assert_eq!(c1.sub, c2.sub);
        assert_ne!(c1.jti, c2.jti);
    }

    proptest! {
        /// Any subject string survives an encode/decode round trip.
        #[test]
        fn prop_round_trip_preserves_subject(subject in ".{0,64}") {
            let token = encode_session_token(&subject).expect("encoding should succeed");
            let claims = decode_session_token(&token).expect("decoding should succeed");
            prop_assert_eq!(claims.sub, subject);
        }

        /// Random strings never decode successfully.
        #[test]
        fn prop_random_strings_never_decode(garbage in "[A-Za-z0-9._-]{0,128}") {
            let result = decode_session_token(&garbage);
            prop_assert!(result.is_err());
        }
    }
}
