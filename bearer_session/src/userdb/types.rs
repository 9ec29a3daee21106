use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A credential record: the subject identity plus its password hash.
///
/// The hash field never serializes and never prints; API responses and
/// logs see `{id, email, created_at}` at most.
#[derive(Clone, Serialize, FromRow, PartialEq)]
pub struct User {
    /// Store-assigned identifier (UUID v4 text).
    pub id: String,
    /// Login identity; unique per account.
    pub email: String,
    /// PHC-format Argon2 hash of the account password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record with a fresh id.
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}
