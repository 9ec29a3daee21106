mod csrf;
mod session;
mod token;

pub use csrf::{issue_csrf_token, validate_csrf_token};
pub use session::{
    extract_session_token, prepare_logout_response, session_cookie_headers,
    verify_and_rotate_session, verify_session,
};
pub use token::{SessionClaims, decode_session_token, encode_session_token};
