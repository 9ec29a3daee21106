mod data_store;
mod errors;

pub use data_store::{DB_TABLE_PREFIX, DataStore, GENERIC_DATA_STORE};
pub use errors::StorageError;

/// Touch the lazily connected store so a misconfigured environment
/// fails at startup instead of on the first request.
pub async fn init() -> Result<(), StorageError> {
    let _ = *GENERIC_DATA_STORE;

    Ok(())
}
