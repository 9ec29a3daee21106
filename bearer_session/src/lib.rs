//! bearer-session - Rotating cookie-session authentication
//!
//! This crate issues and verifies signed session tokens carried in
//! cookies, rotates them on every successful verification so sessions
//! slide rather than expire mid-use, and pairs them with a stateless
//! double-submit CSRF token for state-changing requests. Password
//! hashing and the user record store round out the account flows.

mod coordination;
mod credentials;
mod session;
mod storage;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

// Re-export the auth facade and account flows
pub use coordination::{
    CoordinationError, check_mutate, check_read, check_read_and_rotate, login, signup,
};

pub use credentials::{CredentialError, hash_password, verify_password};

pub use session::{
    CSRF_TOKEN_TTL, SESSION_COOKIE_NAME, SESSION_TOKEN_TTL, SessionClaims, SessionError,
    decode_session_token, encode_session_token, extract_session_token, issue_csrf_token,
    prepare_logout_response, session_cookie_headers, validate_csrf_token,
    verify_and_rotate_session, verify_session,
};

// The data store handle is public so host applications can keep their
// own tables in the same database the auth layer is configured for.
pub use storage::{DB_TABLE_PREFIX, DataStore, GENERIC_DATA_STORE, StorageError};

pub use userdb::{User, UserError, UserStore};

/// Initialize the authentication layer: connect the configured data
/// store and create the user tables.
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    storage::init().await?;
    userdb::init().await?;
    Ok(())
}
