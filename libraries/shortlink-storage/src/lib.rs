//! Shortlink Storage
//!
//! `SQLite` database layer for the shortlink service.
//!
//! This crate provides persistent storage for users and their links.
//! Each operation module owns its own queries:
//!
//! - **Vertical slicing**: `users` and `links` each own their statements
//! - **One statement per operation**: every mutation or lookup is a single
//!   autocommit statement against the pool
//!
//! # Example
//!
//! ```rust,no_run
//! use shortlink_storage::{create_pool, init_schema, models::NewUser, users};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://shortlink.db").await?;
//! init_schema(&pool).await?;
//!
//! let user = users::create(
//!     &pool,
//!     NewUser {
//!         username: "ada".to_string(),
//!         email: "ada@example.com".to_string(),
//!         provider: "github".to_string(),
//!     },
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

mod error;

// Vertical slices
pub mod links;
pub mod models;
pub mod users;

pub use error::StorageError;

use sqlx::sqlite::SqlitePool;

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `sqlite://shortlink.db`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true) // Create database file if it doesn't exist
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("database pool created for {}", database_url);

    Ok(pool)
}

/// Ensure the target tables exist.
///
/// Idempotent; safe to run on every startup. Uniqueness of usernames and of
/// link names within a user is enforced by pre-checks in the operation
/// modules, not by constraints here.
///
/// # Errors
///
/// Returns an error if a statement fails
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            email    TEXT NOT NULL,
            provider TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS links (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id),
            url     TEXT NOT NULL,
            name    TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("schema ready");

    Ok(())
}
