//! Shared initialization for tests that touch configuration statics or
//! the data store.

use std::env;
use std::sync::Once;

static ENV_INIT: Once = Once::new();

/// Load test environment variables exactly once, before any
/// configuration static is first dereferenced.
fn init_test_env() {
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            let _ = dotenvy::dotenv();
        }

        // The shared-cache URI keeps one in-memory database alive
        // across the pool's connections.
        let defaults = [
            ("AUTH_SERVER_SECRET", "test-auth-server-secret"),
            ("GENERIC_DATA_STORE_TYPE", "sqlite"),
            (
                "GENERIC_DATA_STORE_URL",
                "sqlite:file:memdb_test?mode=memory&cache=shared",
            ),
        ];
        for (key, value) in defaults {
            if env::var(key).is_err() {
                unsafe { env::set_var(key, value) };
            }
        }
    });
}

/// Prepare the environment and the user tables. Idempotent; call at the
/// top of every test that goes near the store.
pub(crate) async fn init_test_environment() {
    init_test_env();

    crate::userdb::init()
        .await
        .expect("Failed to initialize user store for tests");
}
