/// User API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use shortlink_storage::models::{NewUser, User, UserUpdate};
use shortlink_storage::users;

// Absent fields decode to empty/zero and are caught by the presence checks,
// so "field missing" and "field empty" answer the same way.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub provider: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub username: String,
}

/// POST /users/create
/// Register a new user
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<User>> {
    let Json(req) = payload?;

    if req.username.is_empty() || req.email.is_empty() || req.provider.is_empty() {
        return Err(ServerError::Validation(
            "missing required field(s): username, email, or provider".to_string(),
        ));
    }

    let user = users::create(
        &state.pool,
        NewUser {
            username: req.username,
            email: req.email,
            provider: req.provider,
        },
    )
    .await?;

    Ok(Json(user))
}

/// GET /users/:id
/// Fetch a user by id
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>> {
    let Path(id) = id?;

    let user = users::get_by_id(&state.pool, id).await?;

    Ok(Json(user))
}

/// POST /users/:id/update
/// Rename a user. The path id selects the row; the body id is required but
/// carries no extra meaning.
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<User>> {
    let Path(id) = id?;
    let Json(req) = payload?;

    if req.id == 0 || req.username.is_empty() {
        return Err(ServerError::Validation(
            "missing required field(s): id or username".to_string(),
        ));
    }

    let user = users::update(
        &state.pool,
        UserUpdate {
            id,
            username: req.username,
        },
    )
    .await?;

    Ok(Json(user))
}

/// POST /users/:id/delete
/// Physically remove a user
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>> {
    let Path(id) = id?;

    users::delete(&state.pool, id).await?;

    Ok(Json(json!({ "message": "user deleted" })))
}
