//! Account flows: signup and login
//!
//! Both flows work purely against the user store and the credential
//! hasher; neither reads an existing session cookie. Login hands back a
//! fresh session token for the caller to install in the response.

use crate::coordination::errors::CoordinationError;
use crate::credentials::{hash_password, verify_password};
use crate::session::encode_session_token;
use crate::userdb::{User, UserStore};

/// Minimum accepted password length, counted in characters.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Register a new account.
///
/// Rejects passwords shorter than six characters and subjects that
/// already have an account. The stored record carries only the hash.
pub async fn signup(email: &str, password: &str) -> Result<User, CoordinationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoordinationError::PasswordTooWeak.log());
    }

    if UserStore::get_user_by_email(email).await?.is_some() {
        return Err(CoordinationError::UserExists.log());
    }

    let password_hash = hash_password(password)?;
    let user = UserStore::create_user(User::new(email.to_string(), password_hash)).await?;

    tracing::info!("New account created: {}", user.id);
    Ok(user)
}

/// Authenticate a subject and mint their first session token.
///
/// Unknown subjects and wrong passwords collapse into the same
/// `CredentialInvalid` so a caller cannot probe for registered emails.
pub async fn login(email: &str, password: &str) -> Result<String, CoordinationError> {
    let Some(user) = UserStore::get_user_by_email(email).await? else {
        return Err(CoordinationError::CredentialInvalid.log());
    };

    if !verify_password(password, &user.password_hash) {
        return Err(CoordinationError::CredentialInvalid.log());
    }

    let token = encode_session_token(&user.email)?;
    tracing::debug!("Session issued for user {}", user.id);
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::decode_session_token;
    use crate::test_utils::init_test_environment;
    use serial_test::serial;
    use uuid::Uuid;

    fn unique_email(tag: &str) -> String {
        format!("{}-{}@example.com", tag, Uuid::new_v4())
    }

    #[tokio::test]
    #[serial]
    async fn test_signup_rejects_short_password() {
        init_test_environment().await;

        // "abc" is three characters, below the six-character floor
        let result = signup(&unique_email("short"), "abc").await;
        assert!(matches!(result, Err(CoordinationError::PasswordTooWeak)));
    }

    #[tokio::test]
    #[serial]
    async fn test_signup_accepts_six_character_password() {
        init_test_environment().await;

        let email = unique_email("signup");
        let user = signup(&email, "abcdef")
            .await
            .expect("signup should succeed");

        assert_eq!(user.email, email);
        assert!(user.password_hash.starts_with("$argon2"));
        assert_ne!(user.password_hash, "abcdef");
    }

    #[tokio::test]
    #[serial]
    async fn test_duplicate_signup_is_user_exists() {
        init_test_environment().await;

        let email = unique_email("dupe");
        signup(&email, "abcdef")
            .await
            .expect("first signup should succeed");

        let result = signup(&email, "ghijkl").await;
        assert!(matches!(result, Err(CoordinationError::UserExists)));
    }

    #[tokio::test]
    #[serial]
    async fn test_login_round_trip() {
        init_test_environment().await;

        // Given a registered account
        let email = unique_email("login");
        signup(&email, "abcdef").await.expect("signup should succeed");

        // When logging in with the right password
        let token = login(&email, "abcdef").await.expect("login should succeed");

        // Then the issued token asserts the account email
        let claims = decode_session_token(&token).expect("token should decode");
        assert_eq!(claims.sub, email);
    }

    #[tokio::test]
    #[serial]
    async fn test_login_wrong_password_is_credential_invalid() {
        init_test_environment().await;

        let email = unique_email("wrongpw");
        signup(&email, "abcdef").await.expect("signup should succeed");

        let result = login(&email, "abcdeg").await;
        assert!(matches!(result, Err(CoordinationError::CredentialInvalid)));
    }

    #[tokio::test]
    #[serial]
    async fn test_login_unknown_subject_is_credential_invalid() {
        init_test_environment().await;

        let result = login(&unique_email("ghost"), "abcdef").await;
        assert!(matches!(result, Err(CoordinationError::CredentialInvalid)));
    }
}
