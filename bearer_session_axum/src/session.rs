use axum::{
    extract::FromRequestParts,
    response::{IntoResponse, Response},
};
use http::{HeaderMap, StatusCode, request::Parts};

use bearer_session::{
    CoordinationError, check_mutate, check_read, check_read_and_rotate, session_cookie_headers,
    validate_csrf_token,
};

use super::error::coordination_error_response;

/// Rejection produced by the session extractors.
///
/// Carries the status and message that the coordination error mapping
/// assigns to the failure, rendered as a plain-text response.
#[derive(Debug)]
pub struct AuthFailure {
    status: StatusCode,
    message: String,
}

impl From<CoordinationError> for AuthFailure {
    fn from(err: CoordinationError) -> Self {
        let (status, message) = coordination_error_response(&err);
        Self { status, message }
    }
}

impl IntoResponse for AuthFailure {
    fn into_response(self) -> Response {
        tracing::debug!("Auth check failed: {} {}", self.status, self.message);
        (self.status, self.message).into_response()
    }
}

/// Anti-forgery check with no session involvement.
///
/// Validates the `X-CSRF-Token` request header against the process
/// secret. Used by the endpoints that accept state-changing requests
/// from anonymous callers (signup, login, logout).
pub struct CsrfChecked;

impl<B> FromRequestParts<B> for CsrfChecked
where
    B: Send + Sync,
{
    type Rejection = AuthFailure;

    async fn from_request_parts(parts: &mut Parts, _: &B) -> Result<Self, Self::Rejection> {
        let csrf_header = parts
            .headers
            .get("X-CSRF-Token")
            .and_then(|h| h.to_str().ok());

        validate_csrf_token(csrf_header).map_err(CoordinationError::from)?;
        Ok(CsrfChecked)
    }
}

/// Read-only authenticated session.
///
/// Verifies the session cookie and exposes the subject it asserts. The
/// response carries no new cookie, so the client keeps its current
/// token and expiry. Use [`RotatedSession`] when the request should
/// extend the session.
pub struct AuthSession {
    /// Subject identity the session asserts (the account email).
    pub subject: String,
}

impl<B> FromRequestParts<B> for AuthSession
where
    B: Send + Sync,
{
    type Rejection = AuthFailure;

    async fn from_request_parts(parts: &mut Parts, _: &B) -> Result<Self, Self::Rejection> {
        let subject = check_read(&parts.headers)?;
        Ok(AuthSession { subject })
    }
}

/// Authenticated session with per-request rotation.
///
/// Verifies the session cookie, mints a replacement token with a fresh
/// expiry window, and hands the handler ready-to-attach `Set-Cookie`
/// headers. The handler must include `cookie_headers` in its response,
/// or the client keeps the old token, one step closer to expiry.
///
/// # Example
///
/// ```no_run
/// use axum::{Router, routing::get};
/// use http::HeaderMap;
/// use bearer_session_axum::RotatedSession;
///
/// async fn whoami(session: RotatedSession) -> (HeaderMap, String) {
///     (session.cookie_headers, session.subject)
/// }
///
/// let app: Router = Router::new().route("/whoami", get(whoami));
/// ```
pub struct RotatedSession {
    /// Subject identity the session asserts (the account email).
    pub subject: String,
    /// `Set-Cookie` headers installing the replacement token.
    pub cookie_headers: HeaderMap,
}

impl<B> FromRequestParts<B> for RotatedSession
where
    B: Send + Sync,
{
    type Rejection = AuthFailure;

    async fn from_request_parts(parts: &mut Parts, _: &B) -> Result<Self, Self::Rejection> {
        let (token, subject) = check_read_and_rotate(&parts.headers)?;
        let cookie_headers = session_cookie_headers(&token).map_err(CoordinationError::from)?;
        Ok(RotatedSession {
            subject,
            cookie_headers,
        })
    }
}

/// CSRF-checked, rotated session for state-changing requests.
///
/// The anti-forgery header is validated before the session cookie is
/// touched: a forged cross-site request is rejected without extending
/// anything, and a CSRF failure on a valid session leaves that
/// session's expiry untouched.
pub struct MutatedSession {
    /// `Set-Cookie` headers installing the replacement token.
    pub cookie_headers: HeaderMap,
}

impl<B> FromRequestParts<B> for MutatedSession
where
    B: Send + Sync,
{
    type Rejection = AuthFailure;

    async fn from_request_parts(parts: &mut Parts, _: &B) -> Result<Self, Self::Rejection> {
        let csrf_header = parts
            .headers
            .get("X-CSRF-Token")
            .and_then(|h| h.to_str().ok());

        let token = check_mutate(&parts.headers, csrf_header)?;
        let cookie_headers = session_cookie_headers(&token).map_err(CoordinationError::from)?;
        Ok(MutatedSession { cookie_headers })
    }
}
