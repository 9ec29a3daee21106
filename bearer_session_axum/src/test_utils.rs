//! Shared test initialization for the axum integration tests
//!
//! Loads `.env_test` when present and falls back to in-process defaults
//! so the suite runs with no setup: an in-memory shared-cache SQLite
//! store and a fixed signing secret.

use std::sync::Once;

static ENV_INIT: Once = Once::new();

fn init_test_env() {
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            let _ = dotenvy::dotenv();
        }

        // A plain :memory: URL would give every pooled connection its
        // own empty database; the shared-cache URI keeps one store.
        let defaults = [
            ("AUTH_SERVER_SECRET", "test-auth-server-secret"),
            ("GENERIC_DATA_STORE_TYPE", "sqlite"),
            (
                "GENERIC_DATA_STORE_URL",
                "sqlite:file:memdb_axum_test?mode=memory&cache=shared",
            ),
        ];
        for (key, value) in defaults {
            if std::env::var(key).is_err() {
                unsafe { std::env::set_var(key, value) };
            }
        }
    });
}

/// Prepare the process for a test: environment first, then the shared
/// store. Call this at the top of every test that touches session
/// statics or the user store.
pub(crate) async fn init_test_environment() {
    init_test_env();
    bearer_session::init()
        .await
        .expect("test environment initialization should succeed");
}

/// Mint a session token whose expiry has already passed, signed with
/// the same secret the process statics read.
pub(crate) fn expired_session_token(subject: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = bearer_session::SessionClaims {
        sub: subject.to_string(),
        iat: now - 600,
        exp: now - 10,
        jti: "expired-test-nonce".to_string(),
    };

    let secret = std::env::var("AUTH_SERVER_SECRET")
        .expect("init_test_environment should have run first");
    jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("encoding should succeed")
}
