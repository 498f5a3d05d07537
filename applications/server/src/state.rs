/// Shared application state
use crate::cache::CacheClient;
use sqlx::SqlitePool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub cache: CacheClient,
}

impl AppState {
    pub fn new(pool: SqlitePool, cache: CacheClient) -> Self {
        Self { pool, cache }
    }
}
