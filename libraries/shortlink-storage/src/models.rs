//! Entity types shared between the storage layer and the HTTP surface.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account.
///
/// `links` is filled in only by the dedicated per-user lookup
/// ([`crate::links::get_by_user_id`]); plain user lookups leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Storage-assigned identifier.
    pub id: i64,

    /// Unique across all users.
    pub username: String,

    pub email: String,

    /// Sign-in origin, e.g. "github".
    pub provider: String,

    #[sqlx(skip)]
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A named URL owned by a user.
///
/// `name` is unique within its owning user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Storage-assigned identifier.
    pub id: i64,

    /// Owning user.
    pub user_id: i64,

    pub url: String,

    pub name: String,
}

/// Input for inserting a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub provider: String,
}

/// Input for renaming a user. Only the username is mutable.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: i64,
    pub username: String,
}

/// Input for inserting a link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub user_id: i64,
    pub url: String,
    pub name: String,
}

/// Input for rewriting a link's url and name.
#[derive(Debug, Clone)]
pub struct LinkUpdate {
    pub id: i64,
    pub user_id: i64,
    pub url: String,
    pub name: String,
}
