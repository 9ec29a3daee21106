use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use http::HeaderMap;
use serde::Deserialize;
use serde_json::{Value, json};

use bearer_session::{
    issue_csrf_token, login, prepare_logout_response, session_cookie_headers, signup,
};

use super::error::IntoResponseError;
use super::session::CsrfChecked;

pub(super) fn router() -> Router {
    Router::new()
        .route("/csrftoken", get(csrf_token))
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
}

/// Signup and login request body.
#[derive(Deserialize)]
struct CredentialPayload {
    email: String,
    password: String,
}

/// Issue a fresh anti-forgery token for the client to echo back in the
/// `X-CSRF-Token` header of its state-changing requests.
async fn csrf_token() -> Result<Json<Value>, (StatusCode, String)> {
    let token = issue_csrf_token().into_response_error()?;
    Ok(Json(json!({ "csrf_token": token })))
}

/// Register a new account.
///
/// The created record is echoed back without any credential material.
/// Signup does not log the caller in; the client follows up with a
/// login request.
async fn signup_handler(
    _csrf: CsrfChecked,
    Json(payload): Json<CredentialPayload>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, String)> {
    let user = signup(&payload.email, &payload.password)
        .await
        .into_response_error()?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": user.id, "email": user.email })),
    ))
}

/// Authenticate and install the session cookie.
async fn login_handler(
    _csrf: CsrfChecked,
    Json(payload): Json<CredentialPayload>,
) -> Result<(HeaderMap, Json<Value>), (StatusCode, String)> {
    let token = login(&payload.email, &payload.password)
        .await
        .into_response_error()?;
    let headers = session_cookie_headers(&token).into_response_error()?;

    Ok((headers, Json(json!({ "message": "Logged in successfully." }))))
}

/// Clear the session cookie.
///
/// Succeeds whether or not a session was present. The old token stays
/// cryptographically valid until its own expiry; logout only removes
/// it from the client.
async fn logout_handler(
    _csrf: CsrfChecked,
) -> Result<(HeaderMap, Json<Value>), (StatusCode, String)> {
    let headers = prepare_logout_response().into_response_error()?;

    Ok((headers, Json(json!({ "message": "Successfully logged-out" }))))
}
