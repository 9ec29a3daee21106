//! Auth facade: the two access patterns request handlers use
//!
//! Read-only endpoints verify the session; mutating endpoints check the
//! anti-forgery header first and only then touch the session. All three
//! checks are pure computations over the request headers, the process
//! secret, and the clock.

use http::header::HeaderMap;

use crate::coordination::errors::CoordinationError;
use crate::session::{validate_csrf_token, verify_and_rotate_session, verify_session};

/// Authenticate a read-only request without extending its session.
///
/// Returns the subject. The response carries no new cookie, so the
/// client keeps its current token and expiry.
pub fn check_read(headers: &HeaderMap) -> Result<String, CoordinationError> {
    let subject = verify_session(headers)?;
    Ok(subject)
}

/// Authenticate a read request and extend its session.
///
/// Returns `(new_token, subject)`; the caller installs the new token in
/// the response cookie.
pub fn check_read_and_rotate(headers: &HeaderMap) -> Result<(String, String), CoordinationError> {
    let rotated = verify_and_rotate_session(headers)?;
    Ok(rotated)
}

/// Authenticate a state-changing request: anti-forgery first, then
/// session verification with rotation.
///
/// The CSRF check runs before any session logic, so a forged cross-site
/// request is rejected without touching rotation, and a CSRF failure on
/// a valid session leaves that session's expiry untouched. Returns only
/// the replacement token; mutating callers act on a resource id from
/// the request, not on the identity.
pub fn check_mutate(
    headers: &HeaderMap,
    csrf_header: Option<&str>,
) -> Result<String, CoordinationError> {
    validate_csrf_token(csrf_header)?;
    let (new_token, _subject) = verify_and_rotate_session(headers)?;
    Ok(new_token)
}
