//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Storage handle constructed once at startup and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
