use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A stored todo record.
///
/// `created_at` orders the list view but stays out of the serialized
/// form the API returns.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub(crate) struct Todo {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) description: String,
    #[serde(skip_serializing)]
    pub(crate) created_at: DateTime<Utc>,
}

impl Todo {
    pub(crate) fn new(title: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            created_at: Utc::now(),
        }
    }
}
