//! Central configuration for the bearer-session axum integration

use std::sync::LazyLock;

/// Mount point of the authentication router.
/// Default: "/api"
pub static BS_ROUTE_PREFIX: LazyLock<String> =
    LazyLock::new(|| std::env::var("BS_ROUTE_PREFIX").unwrap_or_else(|_| "/api".to_string()));
