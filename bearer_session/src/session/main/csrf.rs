//! Double-submit CSRF guard
//!
//! Issues self-contained anti-forgery tokens of the form
//! `nonce.expiry.mac`, where the MAC is HMAC-SHA256 over `nonce.expiry`
//! keyed by `AUTH_SERVER_SECRET`. Validation recomputes the MAC and
//! checks the expiry; nothing is stored server-side and the token is
//! deliberately not bound to any session cookie. Protection rests on
//! the token being unguessable and readable only by same-origin code.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::session::config::{AUTH_SERVER_SECRET, CSRF_TOKEN_TTL};
use crate::session::errors::SessionError;
use crate::utils::gen_random_string;

type HmacSha256 = Hmac<Sha256>;

fn sign_csrf_payload(payload: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(&AUTH_SERVER_SECRET).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    let result = mac.finalize().into_bytes();
    URL_SAFE_NO_PAD.encode(result)
}

/// Mint a fresh anti-forgery token, valid for `CSRF_TOKEN_TTL` seconds.
pub fn issue_csrf_token() -> Result<String, SessionError> {
    let nonce = gen_random_string(24)?;
    let expires_at = Utc::now().timestamp() + *CSRF_TOKEN_TTL as i64;
    let payload = format!("{nonce}.{expires_at}");
    let mac = sign_csrf_payload(&payload);
    Ok(format!("{payload}.{mac}"))
}

/// Check the echoed anti-forgery header.
///
/// An absent header is `CsrfMissing`, everything else that goes wrong
/// is `CsrfInvalid`. The MAC is compared in constant time and checked
/// before the expiry so an attacker learns nothing about a forged
/// token's timestamp handling.
pub fn validate_csrf_token(header_value: Option<&str>) -> Result<(), SessionError> {
    let token = header_value.ok_or(SessionError::CsrfMissing)?;

    let parts: Vec<&str> = token.split('.').collect();
    let [nonce, expires_at, mac] = parts.as_slice() else {
        return Err(SessionError::CsrfInvalid);
    };

    let expected = sign_csrf_payload(&format!("{nonce}.{expires_at}"));
    let mac_ok: bool = mac.as_bytes().ct_eq(expected.as_bytes()).into();
    if !mac_ok {
        return Err(SessionError::CsrfInvalid);
    }

    let expires_at: i64 = expires_at
        .parse()
        .map_err(|_| SessionError::CsrfInvalid)?;
    if expires_at < Utc::now().timestamp() {
        return Err(SessionError::CsrfInvalid);
    }

    Ok(())
}
