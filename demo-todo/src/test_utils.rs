use std::sync::Once;

static ENV_INIT: Once = Once::new();

/// Load test configuration once per process.
///
/// Prefers `.env_test`, falls back to `.env`, and finally fills in
/// in-process defaults so the suite runs without any dotenv file.
fn init_test_env() {
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }

        let defaults = [
            ("AUTH_SERVER_SECRET", "test-auth-server-secret"),
            ("GENERIC_DATA_STORE_TYPE", "sqlite"),
            // Shared-cache URI so every pooled connection sees the same
            // in-memory database.
            (
                "GENERIC_DATA_STORE_URL",
                "sqlite:file:memdb_demo_test?mode=memory&cache=shared",
            ),
        ];
        for (key, value) in defaults {
            if std::env::var(key).is_err() {
                unsafe {
                    std::env::set_var(key, value);
                }
            }
        }
    });
}

/// Bring up the auth layer and the todo table for a test.
///
/// Must run before anything touches the session statics, otherwise the
/// defaults above arrive too late.
pub(crate) async fn init_test_environment() {
    init_test_env();
    bearer_session::init()
        .await
        .expect("auth layer should initialize");
    crate::todos::init()
        .await
        .expect("todo table should initialize");
}
