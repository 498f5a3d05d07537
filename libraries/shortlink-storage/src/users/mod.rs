//! User queries.
//!
//! Every public operation issues exactly one parameterized statement;
//! uniqueness is guarded by a separate pre-check query, so a narrow
//! check-then-mutate race window remains (accepted).

use crate::error::{Result, StorageError};
use crate::models::{NewUser, User, UserUpdate};
use sqlx::SqlitePool;

/// Insert a new user and return the stored row.
///
/// Fails with [`StorageError::Conflict`] when the username is already taken.
pub async fn create(pool: &SqlitePool, new_user: NewUser) -> Result<User> {
    if username_in_use(pool, &new_user.username, None).await? {
        return Err(StorageError::conflict("username already exists"));
    }

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, email, provider) VALUES (?, ?, ?)
         RETURNING id, username, email, provider",
    )
    .bind(&new_user.username)
    .bind(&new_user.email)
    .bind(&new_user.provider)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Look up a user by id.
pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<User> {
    sqlx::query_as::<_, User>("SELECT id, username, email, provider FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StorageError::not_found("user", id))
}

/// Rename a user and return the stored row.
///
/// Fails with [`StorageError::Conflict`] when a *different* user already
/// holds the new username; re-saving the user's own username is permitted.
pub async fn update(pool: &SqlitePool, update: UserUpdate) -> Result<User> {
    if username_in_use(pool, &update.username, Some(update.id)).await? {
        return Err(StorageError::conflict("username already exists"));
    }

    sqlx::query_as::<_, User>(
        "UPDATE users SET username = ? WHERE id = ?
         RETURNING id, username, email, provider",
    )
    .bind(&update.username)
    .bind(update.id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| StorageError::not_found("user", update.id))
}

/// Physically delete a user row.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("user", id));
    }

    Ok(())
}

/// Pre-check: is `username` held by any user other than `exclude_id`?
async fn username_in_use(
    pool: &SqlitePool,
    username: &str,
    exclude_id: Option<i64>,
) -> Result<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM users WHERE username = ? AND (? IS NULL OR id <> ?)",
    )
    .bind(username)
    .bind(exclude_id)
    .bind(exclude_id)
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}
