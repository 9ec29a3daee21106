use axum::{Json, Router, routing::get};
use http::HeaderMap;
use serde_json::{Value, json};

use super::session::RotatedSession;

pub(super) fn router() -> Router {
    Router::new().route("/user", get(current_user))
}

/// Identify the caller and extend their session.
///
/// The extractor has already rotated the token; this handler only
/// attaches the refreshed cookie and reports the subject.
async fn current_user(session: RotatedSession) -> (HeaderMap, Json<Value>) {
    (
        session.cookie_headers,
        Json(json!({ "email": session.subject })),
    )
}
