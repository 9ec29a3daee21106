//! Combined router for the authentication endpoints

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Create a router serving every authentication endpoint.
///
/// The routes are registered relative to the mount point, so an
/// application nests this once under `BS_ROUTE_PREFIX`:
/// - {BS_ROUTE_PREFIX}/csrftoken
/// - {BS_ROUTE_PREFIX}/signup
/// - {BS_ROUTE_PREFIX}/login
/// - {BS_ROUTE_PREFIX}/logout
/// - {BS_ROUTE_PREFIX}/user
pub fn bearer_session_router() -> Router {
    bearer_session_router_no_trace().layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(true),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Create the same router without HTTP tracing.
///
/// Use this if you add your own tracing middleware or do not need HTTP
/// request tracing.
pub fn bearer_session_router_no_trace() -> Router {
    Router::new()
        .merge(super::auth::router())
        .merge(super::user::router())
}
