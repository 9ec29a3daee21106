//! User-facing error taxonomy for the authentication flows

use thiserror::Error;

use crate::credentials::CredentialError;
use crate::session::SessionError;
use crate::userdb::UserError;

/// Errors surfaced by the auth facade and the account flows. Display
/// strings double as the client-visible messages, so they stay short
/// and never carry credential material.
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// Unknown subject or wrong password; the two are deliberately
    /// indistinguishable to the caller.
    #[error("Invalid credentials")]
    CredentialInvalid,

    /// Signup for an already-registered subject.
    #[error("User already exists")]
    UserExists,

    /// Signup password below the minimum length.
    #[error("Password is too short")]
    PasswordTooWeak,

    /// Error from session operations
    #[error("Session error: {0}")]
    SessionError(SessionError),

    /// Error from password hashing operations
    #[error("Credential error: {0}")]
    CredentialError(CredentialError),

    /// Error from the user database operations
    #[error("User error: {0}")]
    UserError(UserError),
}

impl CoordinationError {
    /// Log the error and return self, allowing method chaining at the
    /// point a flow decides to fail.
    pub fn log(self) -> Self {
        match &self {
            Self::CredentialInvalid => tracing::debug!("Invalid credentials"),
            Self::UserExists => tracing::debug!("User already exists"),
            Self::PasswordTooWeak => tracing::debug!("Password is too short"),
            Self::SessionError(err) => tracing::debug!("Session error: {}", err),
            Self::CredentialError(err) => tracing::error!("Credential error: {}", err),
            Self::UserError(err) => tracing::error!("User error: {}", err),
        }
        self
    }
}

// Custom From implementations that log at the point of conversion.
// Session failures are routine (every expired cookie produces one) and
// log at debug; store and hasher faults are operational problems.

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        let error = Self::SessionError(err);
        tracing::debug!("{}", error);
        error
    }
}

impl From<CredentialError> for CoordinationError {
    fn from(err: CredentialError) -> Self {
        let error = Self::CredentialError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        let error = Self::UserError(err);
        tracing::error!("{}", error);
        error
    }
}
