//! Session manager
//!
//! Orchestrates issuance, extraction from the cookie header,
//! verification, and rotation of session tokens. The cookie value on
//! the wire is the literal prefix `"Bearer "` followed by the signed
//! token text. Nothing is persisted server-side; the caller writes the
//! returned `Set-Cookie` headers into the outgoing response.

use http::header::{COOKIE, HeaderMap};

use crate::session::config::{SESSION_COOKIE_NAME, SESSION_TOKEN_TTL};
use crate::session::errors::SessionError;
use crate::session::main::token::{decode_session_token, encode_session_token};
use crate::utils::header_set_cookie;

/// Find the session cookie value in the request `Cookie` header.
///
/// Returns `Ok(None)` when the header or the named cookie is absent.
/// A surrounding pair of double quotes is stripped: clients that quote
/// cookie values containing spaces still round-trip.
pub(crate) fn get_session_cookie_from_headers(
    headers: &HeaderMap,
) -> Result<Option<&str>, SessionError> {
    let Some(cookie_header) = headers.get(COOKIE) else {
        tracing::debug!("No cookie header found");
        return Ok(None);
    };

    let cookie_str = cookie_header.to_str().map_err(|e| {
        tracing::error!("Invalid cookie header: {}", e);
        SessionError::HeaderError("Invalid cookie header".to_string())
    })?;

    let cookie_name = SESSION_COOKIE_NAME.as_str();

    let cookie_value = cookie_str.split(';').map(|s| s.trim()).find_map(|s| {
        let mut parts = s.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(k), Some(v)) if k == cookie_name => Some(v.trim_matches('"')),
            _ => None,
        }
    });

    if cookie_value.is_none() {
        tracing::debug!("No session cookie '{}' found in cookies", cookie_name);
    }

    Ok(cookie_value)
}

/// Pull the token text out of the request's session cookie.
///
/// The cookie value is expected as `"Bearer <token>"`; everything after
/// the first space is the token. An absent cookie is `SessionMissing`;
/// a value with no space yields an empty token, which the codec then
/// rejects as `TokenInvalid`.
pub fn extract_session_token(headers: &HeaderMap) -> Result<&str, SessionError> {
    let cookie_value =
        get_session_cookie_from_headers(headers)?.ok_or(SessionError::SessionMissing)?;

    let token = cookie_value
        .split_once(' ')
        .map_or("", |(_scheme, rest)| rest);
    Ok(token)
}

/// Verify the session carried by the request and return its subject.
pub fn verify_session(headers: &HeaderMap) -> Result<String, SessionError> {
    let token = extract_session_token(headers)?;
    let claims = decode_session_token(token)?;
    Ok(claims.sub)
}

/// Verify the session, then mint a replacement token with a fresh
/// expiry window.
///
/// Returns `(new_token, subject)`. The caller is responsible for
/// writing the new token back into the response cookie; if it never
/// does, the client keeps the old token, one step closer to expiry.
pub fn verify_and_rotate_session(headers: &HeaderMap) -> Result<(String, String), SessionError> {
    let subject = verify_session(headers)?;
    let new_token = encode_session_token(&subject)?;
    Ok((new_token, subject))
}

/// Build the `Set-Cookie` headers installing `token` as the session
/// cookie, prefixed with the `Bearer` scheme. Used at login and after
/// every rotation.
pub fn session_cookie_headers(token: &str) -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.as_str(),
        &format!("Bearer {token}"),
        *SESSION_TOKEN_TTL as i64,
    )?;
    Ok(headers)
}

/// Build the `Set-Cookie` headers clearing the session cookie.
///
/// The old token stays cryptographically valid until its own expiry;
/// logout only removes it from the client.
pub fn prepare_logout_response() -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(&mut headers, SESSION_COOKIE_NAME.as_str(), "", 0)?;
    Ok(headers)
}
