use std::env;
use std::sync::LazyLock;

pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_NAME")
        .ok()
        .unwrap_or("access_token".to_string())
});

/// Session token lifetime in seconds. Every issuance and every rotation
/// starts a fresh window of this length; the cookie Max-Age matches it.
pub static SESSION_TOKEN_TTL: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("SESSION_TOKEN_TTL")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(300) // Default to 5 minutes if not set or invalid
});

/// CSRF token lifetime in seconds.
pub static CSRF_TOKEN_TTL: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("CSRF_TOKEN_TTL")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3600) // Default to 1 hour if not set or invalid
});

pub(crate) static AUTH_SERVER_SECRET: LazyLock<Vec<u8>> =
    LazyLock::new(|| match env::var("AUTH_SERVER_SECRET") {
        Ok(secret) => secret.into_bytes(),
        Err(_) => "default_secret_key_change_in_production"
            .to_string()
            .into_bytes(),
    });
