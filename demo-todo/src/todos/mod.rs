//! Todo records and their protected routes
//!
//! The record collection this service manages behind the session
//! layer. One shared collection, no per-user scoping: identity gates
//! access, not visibility.

mod routes;
mod store;
mod types;

pub(crate) use routes::router;

/// Create the todo table in the configured data store.
pub(crate) async fn init() -> Result<(), store::TodoError> {
    store::TodoStore::init().await
}
