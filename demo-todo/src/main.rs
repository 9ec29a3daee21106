use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bearer_session_axum::{BS_ROUTE_PREFIX, bearer_session_router};

mod server;
#[cfg(test)]
mod test_utils;
mod todos;

use crate::server::spawn_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,bearer_session=debug,bearer_session_axum=debug,info",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Session store first, todo table second; both are idempotent.
    bearer_session_axum::init().await?;
    todos::init().await?;

    let app = Router::new()
        .route("/", get(index))
        .nest(BS_ROUTE_PREFIX.as_str(), bearer_session_router())
        .nest(BS_ROUTE_PREFIX.as_str(), todos::router());

    let http_server = spawn_http_server(3001, app);
    http_server.await?;
    Ok(())
}

async fn index() -> &'static str {
    "demo-todo: sign up at /api/signup, log in at /api/login, manage records under /api/todo"
}
