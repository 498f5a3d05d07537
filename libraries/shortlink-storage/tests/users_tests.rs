//! Integration tests for the users vertical slice
//!
//! Covers:
//! - Create/get round-trips and id assignment
//! - Username uniqueness pre-check on create and update
//! - Physical deletion


use shortlink_storage::models::{NewUser, UserUpdate};
use shortlink_storage::{users, StorageError};
use test_helpers::*;

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        provider: "github".to_string(),
    }
}

#[tokio::test]
async fn test_create_user_assigns_id_and_echoes_fields() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = users::create(pool, new_user("ada"))
        .await
        .expect("Failed to create user");

    assert!(user.id > 0);
    assert_eq!(user.username, "ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.provider, "github");
    assert!(user.links.is_empty());
}

#[tokio::test]
async fn test_create_duplicate_username_conflicts() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    users::create(pool, new_user("ada")).await.unwrap();

    let err = users::create(pool, new_user("ada")).await.unwrap_err();
    assert!(matches!(err, StorageError::Conflict(_)));

    // The failed create must not have inserted a second row.
    assert_eq!(count_rows(pool, "users").await, 1);
}

#[tokio::test]
async fn test_get_user_round_trip() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let created = users::create(pool, new_user("grace")).await.unwrap();
    let fetched = users::get_by_id(pool, created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_missing_user_is_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let err = users::get_by_id(pool, 999).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn test_update_username() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = users::create(pool, new_user("ada")).await.unwrap();

    let updated = users::update(
        pool,
        UserUpdate {
            id: user.id,
            username: "ada2".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.username, "ada2");
    // Untouched columns survive the update.
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.provider, user.provider);
}

#[tokio::test]
async fn test_update_to_taken_username_conflicts() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    users::create(pool, new_user("ada")).await.unwrap();
    let grace = users::create(pool, new_user("grace")).await.unwrap();

    let err = users::update(
        pool,
        UserUpdate {
            id: grace.id,
            username: "ada".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, StorageError::Conflict(_)));

    // Row unchanged after the rejected update.
    let unchanged = users::get_by_id(pool, grace.id).await.unwrap();
    assert_eq!(unchanged.username, "grace");
}

#[tokio::test]
async fn test_update_keeping_own_username_is_allowed() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = users::create(pool, new_user("ada")).await.unwrap();

    let updated = users::update(
        pool,
        UserUpdate {
            id: user.id,
            username: "ada".to_string(),
        },
    )
    .await
    .expect("No-op rename must not conflict with the user itself");

    assert_eq!(updated.username, "ada");
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let err = users::update(
        pool,
        UserUpdate {
            id: 42,
            username: "ghost".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_user_then_get_is_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = users::create(pool, new_user("ada")).await.unwrap();

    users::delete(pool, user.id).await.unwrap();

    let err = users::get_by_id(pool, user.id).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
    assert_eq!(count_rows(pool, "users").await, 0);
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let err = users::delete(pool, 7).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { .. }));
}
