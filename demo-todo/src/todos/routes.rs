use axum::{
    Json, Router,
    extract::Path,
    response::{IntoResponse, Response},
    routing::get,
};
use http::StatusCode;
use serde::Deserialize;
use serde_json::json;

use bearer_session_axum::{AuthSession, MutatedSession, RotatedSession};

use super::store::{TodoError, TodoStore};
use super::types::Todo;

pub(crate) fn router() -> Router {
    Router::new()
        .route("/todo", get(list_todos).post(create_todo))
        .route(
            "/todo/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
}

/// Fields a client supplies when creating or replacing a record.
#[derive(Deserialize)]
struct TodoPayload {
    title: String,
    description: String,
}

async fn create_todo(session: MutatedSession, Json(payload): Json<TodoPayload>) -> Response {
    match TodoStore::create_todo(Todo::new(payload.title, payload.description)).await {
        Ok(todo) => (StatusCode::CREATED, session.cookie_headers, Json(todo)).into_response(),
        Err(e) => store_failure(e),
    }
}

/// List every record without extending the caller's session.
async fn list_todos(_session: AuthSession) -> Response {
    match TodoStore::list_todos().await {
        Ok(todos) => Json(todos).into_response(),
        Err(e) => store_failure(e),
    }
}

/// Fetch one record. Authentication already rotated the session, so
/// even a miss carries the refreshed cookie.
async fn get_todo(session: RotatedSession, Path(id): Path<String>) -> Response {
    match TodoStore::get_todo(&id).await {
        Ok(Some(todo)) => (session.cookie_headers, Json(todo)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            session.cookie_headers,
            format!("Task of ID:{id} doesn't exist."),
        )
            .into_response(),
        Err(e) => store_failure(e),
    }
}

async fn update_todo(
    session: MutatedSession,
    Path(id): Path<String>,
    Json(payload): Json<TodoPayload>,
) -> Response {
    match TodoStore::update_todo(&id, &payload.title, &payload.description).await {
        Ok(Some(todo)) => (session.cookie_headers, Json(todo)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            session.cookie_headers,
            "Update task failed.".to_string(),
        )
            .into_response(),
        Err(e) => store_failure(e),
    }
}

async fn delete_todo(session: MutatedSession, Path(id): Path<String>) -> Response {
    match TodoStore::delete_todo(&id).await {
        Ok(true) => (
            session.cookie_headers,
            Json(json!({ "message": "Successfully deleted." })),
        )
            .into_response(),
        Ok(false) => (
            StatusCode::NOT_FOUND,
            session.cookie_headers,
            "Delete task failed.".to_string(),
        )
            .into_response(),
        Err(e) => store_failure(e),
    }
}

fn store_failure(err: TodoError) -> Response {
    tracing::error!("Todo store failure: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
        .into_response()
}
