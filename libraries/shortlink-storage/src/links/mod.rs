//! Link queries.
//!
//! Same shape as the user slice: one statement per operation, with the
//! per-user name uniqueness guarded by a pre-check query rather than a
//! database constraint.

use crate::error::{Result, StorageError};
use crate::models::{Link, LinkUpdate, NewLink};
use sqlx::SqlitePool;

/// Insert a new link and return the stored row.
pub async fn create(pool: &SqlitePool, new_link: NewLink) -> Result<Link> {
    let link = sqlx::query_as::<_, Link>(
        "INSERT INTO links (user_id, url, name) VALUES (?, ?, ?)
         RETURNING id, user_id, url, name",
    )
    .bind(new_link.user_id)
    .bind(&new_link.url)
    .bind(&new_link.name)
    .fetch_one(pool)
    .await?;

    Ok(link)
}

/// Look up a link by id.
pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Link> {
    sqlx::query_as::<_, Link>("SELECT id, user_id, url, name FROM links WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StorageError::not_found("link", id))
}

/// Rewrite a link's url and name, returning the stored row.
///
/// Fails with [`StorageError::Conflict`] when the name already belongs to a
/// *different* link of the same user; keeping the link's own name is
/// permitted.
pub async fn update(pool: &SqlitePool, update: LinkUpdate) -> Result<Link> {
    if name_in_use(pool, update.user_id, &update.name, update.id).await? {
        return Err(StorageError::conflict("name already exists"));
    }

    sqlx::query_as::<_, Link>(
        "UPDATE links SET url = ?, name = ? WHERE id = ?
         RETURNING id, user_id, url, name",
    )
    .bind(&update.url)
    .bind(&update.name)
    .bind(update.id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| StorageError::not_found("link", update.id))
}

/// Physically delete a link row.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM links WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::not_found("link", id));
    }

    Ok(())
}

/// All links owned by `user_id`, ordered by id.
pub async fn get_by_user_id(pool: &SqlitePool, user_id: i64) -> Result<Vec<Link>> {
    let links = sqlx::query_as::<_, Link>(
        "SELECT id, user_id, url, name FROM links WHERE user_id = ? ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(links)
}

/// Pre-check: does `user_id` already have a link named `name`, other than
/// the link `other_than`?
async fn name_in_use(pool: &SqlitePool, user_id: i64, name: &str, other_than: i64) -> Result<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM links WHERE name = ? AND user_id = ? AND id <> ?",
    )
    .bind(name)
    .bind(user_id)
    .bind(other_than)
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}
