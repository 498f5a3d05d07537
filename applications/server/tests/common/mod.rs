/// Common test utilities and fixtures
use axum::Router;
use shortlink_server::{api, AppState, CacheClient};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Build the real router over a scratch database.
///
/// Uses a tempdir-backed database file (not `:memory:`) so every connection
/// in the pool sees the same data. The `TempDir` must be kept alive for the
/// duration of the test.
pub async fn create_test_app() -> (Router, SqlitePool, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = shortlink_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    shortlink_storage::init_schema(&pool)
        .await
        .expect("Failed to initialize schema");

    let cache = CacheClient::open().expect("Failed to open cache client");

    let app = api::router(AppState::new(pool.clone(), cache));

    (app, pool, temp_dir)
}
