use std::sync::Arc;

use sqlx::SqlitePool;

pub type SharedState = Arc<AppState>;

/// Per-process dependencies handed to every handler through axum `State`.
pub struct AppState {
    pub pool: SqlitePool,
}
