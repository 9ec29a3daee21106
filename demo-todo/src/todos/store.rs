use std::sync::LazyLock;

use sqlx::{Pool, Postgres, Sqlite};
use thiserror::Error;

use bearer_session::{DB_TABLE_PREFIX, GENERIC_DATA_STORE};

use super::types::Todo;

/// Name of the todo table.
/// Default: "{DB_TABLE_PREFIX}todos"
static DB_TABLE_TODOS: LazyLock<String> = LazyLock::new(|| {
    std::env::var("DB_TABLE_TODOS")
        .unwrap_or_else(|_| format!("{}todos", DB_TABLE_PREFIX.as_str()))
});

#[derive(Debug, Error)]
pub(crate) enum TodoError {
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for TodoError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

pub(crate) struct TodoStore;

impl TodoStore {
    /// Create the todo table if it does not exist.
    pub(crate) async fn init() -> Result<(), TodoError> {
        let store = GENERIC_DATA_STORE.lock().await;

        match (store.as_sqlite(), store.as_postgres()) {
            (Some(pool), _) => create_table_sqlite(pool).await,
            (_, Some(pool)) => create_table_postgres(pool).await,
            _ => Err(TodoError::Storage("Unsupported database type".to_string())),
        }
    }

    pub(crate) async fn create_todo(todo: Todo) -> Result<Todo, TodoError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            create_todo_sqlite(pool, todo).await
        } else if let Some(pool) = store.as_postgres() {
            create_todo_postgres(pool, todo).await
        } else {
            Err(TodoError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Every record, oldest first.
    pub(crate) async fn list_todos() -> Result<Vec<Todo>, TodoError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            list_todos_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            list_todos_postgres(pool).await
        } else {
            Err(TodoError::Storage("Unsupported database type".to_string()))
        }
    }

    pub(crate) async fn get_todo(id: &str) -> Result<Option<Todo>, TodoError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_todo_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            get_todo_postgres(pool, id).await
        } else {
            Err(TodoError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Replace title and description; `None` when no row matched.
    pub(crate) async fn update_todo(
        id: &str,
        title: &str,
        description: &str,
    ) -> Result<Option<Todo>, TodoError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            update_todo_sqlite(pool, id, title, description).await
        } else if let Some(pool) = store.as_postgres() {
            update_todo_postgres(pool, id, title, description).await
        } else {
            Err(TodoError::Storage("Unsupported database type".to_string()))
        }
    }

    /// Reports whether a row was deleted.
    pub(crate) async fn delete_todo(id: &str) -> Result<bool, TodoError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            delete_todo_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            delete_todo_postgres(pool, id).await
        } else {
            Err(TodoError::Storage("Unsupported database type".to_string()))
        }
    }
}

// SQLite implementations

async fn create_table_sqlite(pool: &Pool<Sqlite>) -> Result<(), TodoError> {
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL
        )
        "#,
        DB_TABLE_TODOS.as_str()
    ))
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_todo_sqlite(pool: &Pool<Sqlite>, todo: Todo) -> Result<Todo, TodoError> {
    sqlx::query(&format!(
        r#"
        INSERT INTO {} (id, title, description, created_at)
        VALUES (?, ?, ?, ?)
        "#,
        DB_TABLE_TODOS.as_str()
    ))
    .bind(&todo.id)
    .bind(&todo.title)
    .bind(&todo.description)
    .bind(todo.created_at)
    .execute(pool)
    .await?;

    Ok(todo)
}

async fn list_todos_sqlite(pool: &Pool<Sqlite>) -> Result<Vec<Todo>, TodoError> {
    let todos = sqlx::query_as::<_, Todo>(&format!(
        r#"
        SELECT * FROM {} ORDER BY created_at
        "#,
        DB_TABLE_TODOS.as_str()
    ))
    .fetch_all(pool)
    .await?;

    Ok(todos)
}

async fn get_todo_sqlite(pool: &Pool<Sqlite>, id: &str) -> Result<Option<Todo>, TodoError> {
    let todo = sqlx::query_as::<_, Todo>(&format!(
        r#"
        SELECT * FROM {} WHERE id = ?
        "#,
        DB_TABLE_TODOS.as_str()
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(todo)
}

async fn update_todo_sqlite(
    pool: &Pool<Sqlite>,
    id: &str,
    title: &str,
    description: &str,
) -> Result<Option<Todo>, TodoError> {
    let result = sqlx::query(&format!(
        r#"
        UPDATE {} SET title = ?, description = ? WHERE id = ?
        "#,
        DB_TABLE_TODOS.as_str()
    ))
    .bind(title)
    .bind(description)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    get_todo_sqlite(pool, id).await
}

async fn delete_todo_sqlite(pool: &Pool<Sqlite>, id: &str) -> Result<bool, TodoError> {
    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {} WHERE id = ?
        "#,
        DB_TABLE_TODOS.as_str()
    ))
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

// PostgreSQL implementations

async fn create_table_postgres(pool: &Pool<Postgres>) -> Result<(), TodoError> {
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
        DB_TABLE_TODOS.as_str()
    ))
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_todo_postgres(pool: &Pool<Postgres>, todo: Todo) -> Result<Todo, TodoError> {
    sqlx::query(&format!(
        r#"
        INSERT INTO {} (id, title, description, created_at)
        VALUES ($1, $2, $3, $4)
        "#,
        DB_TABLE_TODOS.as_str()
    ))
    .bind(&todo.id)
    .bind(&todo.title)
    .bind(&todo.description)
    .bind(todo.created_at)
    .execute(pool)
    .await?;

    Ok(todo)
}

async fn list_todos_postgres(pool: &Pool<Postgres>) -> Result<Vec<Todo>, TodoError> {
    let todos = sqlx::query_as::<_, Todo>(&format!(
        r#"
        SELECT * FROM {} ORDER BY created_at
        "#,
        DB_TABLE_TODOS.as_str()
    ))
    .fetch_all(pool)
    .await?;

    Ok(todos)
}

async fn get_todo_postgres(pool: &Pool<Postgres>, id: &str) -> Result<Option<Todo>, TodoError> {
    let todo = sqlx::query_as::<_, Todo>(&format!(
        r#"
        SELECT * FROM {} WHERE id = $1
        "#,
        DB_TABLE_TODOS.as_str()
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(todo)
}

async fn update_todo_postgres(
    pool: &Pool<Postgres>,
    id: &str,
    title: &str,
    description: &str,
) -> Result<Option<Todo>, TodoError> {
    let result = sqlx::query(&format!(
        r#"
        UPDATE {} SET title = $1, description = $2 WHERE id = $3
        "#,
        DB_TABLE_TODOS.as_str()
    ))
    .bind(title)
    .bind(description)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    get_todo_postgres(pool, id).await
}

async fn delete_todo_postgres(pool: &Pool<Postgres>, id: &str) -> Result<bool, TodoError> {
    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {} WHERE id = $1
        "#,
        DB_TABLE_TODOS.as_str()
    ))
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
