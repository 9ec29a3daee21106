//! Axum integration for the `bearer-session` authentication library.
//!
//! Serves the authentication endpoints as a mountable [`axum::Router`]
//! and exposes the session checks as request extractors, so protected
//! handlers declare their access pattern in their signature:
//!
//! - [`AuthSession`] verifies the cookie without extending the session.
//! - [`RotatedSession`] verifies and hands back a refreshed cookie.
//! - [`MutatedSession`] checks the anti-forgery header first, then
//!   rotates; use it on every state-changing route.
//! - [`CsrfChecked`] is the anti-forgery check alone, for endpoints
//!   that accept POSTs from anonymous callers.
//!
//! ```no_run
//! use axum::Router;
//! use bearer_session_axum::{BS_ROUTE_PREFIX, bearer_session_router};
//!
//! #[tokio::main]
//! async fn main() {
//!     bearer_session_axum::init().await.expect("store init failed");
//!
//!     let app: Router = Router::new()
//!         .nest(BS_ROUTE_PREFIX.as_str(), bearer_session_router());
//!     // bind and serve `app`
//! }
//! ```

mod auth;
mod config;
mod error;
mod router;
mod session;
#[cfg(test)]
mod test_utils;
mod user;

pub use config::BS_ROUTE_PREFIX;
pub use router::{bearer_session_router, bearer_session_router_no_trace};
pub use session::{AuthFailure, AuthSession, CsrfChecked, MutatedSession, RotatedSession};

// Re-export the pieces host applications wire up at startup, so a demo
// does not need a direct dependency on the core crate for them.
pub use bearer_session::{SESSION_COOKIE_NAME, init};
