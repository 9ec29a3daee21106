mod config;
mod errors;
mod main;

pub use config::{CSRF_TOKEN_TTL, SESSION_COOKIE_NAME, SESSION_TOKEN_TTL};
pub use errors::SessionError;
pub use main::{
    SessionClaims, decode_session_token, encode_session_token, extract_session_token,
    issue_csrf_token, prepare_logout_response, session_cookie_headers, validate_csrf_token,
    verify_and_rotate_session, verify_session,
};
