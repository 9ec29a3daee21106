use http::StatusCode;

use bearer_session::{CoordinationError, SessionError};

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Implementation for CoordinationError to map the auth taxonomy to
/// appropriate status codes
impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| coordination_error_response(&e))
    }
}

/// Implementation for SessionError, for handlers that call the session
/// primitives directly
impl<T> IntoResponseError<T> for Result<T, SessionError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| session_error_response(&e))
    }
}

/// Map a coordination failure to the status and message the client sees.
///
/// The taxonomy variants keep their display text. Operational failures
/// (hasher, store) collapse to a generic 500; their detail stays in the
/// logs.
pub(crate) fn coordination_error_response(err: &CoordinationError) -> (StatusCode, String) {
    match err {
        CoordinationError::CredentialInvalid
        | CoordinationError::UserExists
        | CoordinationError::PasswordTooWeak => (StatusCode::UNAUTHORIZED, err.to_string()),
        CoordinationError::SessionError(e) => session_error_response(e),
        CoordinationError::CredentialError(_) | CoordinationError::UserError(_) => {
            tracing::error!("Internal failure: {}", err);
            internal_error()
        }
    }
}

/// A missing cookie is 404: the resource the request names, its own
/// session, does not exist. Every other session-taxonomy failure is 401.
fn session_error_response(err: &SessionError) -> (StatusCode, String) {
    match err {
        SessionError::SessionMissing => (StatusCode::NOT_FOUND, err.to_string()),
        SessionError::TokenExpired
        | SessionError::TokenInvalid
        | SessionError::CsrfMissing
        | SessionError::CsrfInvalid => (StatusCode::UNAUTHORIZED, err.to_string()),
        _ => {
            tracing::error!("Session subsystem failure: {}", err);
            internal_error()
        }
    }
}

fn internal_error() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}
