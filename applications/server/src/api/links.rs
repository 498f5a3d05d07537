/// Link API routes
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
use shortlink_storage::links;
use shortlink_storage::models::{Link, LinkUpdate, NewLink};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: String,
}

/// POST /links/create
/// Store a new link for a user
pub async fn create_link(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<Json<Link>> {
    let Json(req) = payload?;

    if req.user_id == 0 || req.url.is_empty() || req.name.is_empty() {
        return Err(ServerError::Validation(
            "missing required field(s): userId, url, or name".to_string(),
        ));
    }

    let link = links::create(
        &state.pool,
        NewLink {
            user_id: req.user_id,
            url: req.url,
            name: req.name,
        },
    )
    .await?;

    Ok(Json(link))
}

/// GET /links/:id
/// Fetch a link by id
pub async fn get_link(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Link>> {
    let Path(id) = id?;

    let link = links::get_by_id(&state.pool, id).await?;

    Ok(Json(link))
}

/// POST /links/:id/update
/// Rewrite a link's url and name. The path id selects the row.
pub async fn update_link(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateLinkRequest>, JsonRejection>,
) -> Result<Json<Link>> {
    let Path(id) = id?;
    let Json(req) = payload?;

    if req.id == 0 || req.user_id == 0 || req.url.is_empty() || req.name.is_empty() {
        return Err(ServerError::Validation(
            "missing required field(s): id, userId, url, or name".to_string(),
        ));
    }

    let link = links::update(
        &state.pool,
        LinkUpdate {
            id,
            user_id: req.user_id,
            url: req.url,
            name: req.name,
        },
    )
    .await?;

    Ok(Json(link))
}

/// POST /links/:id/delete
/// Physically remove a link
pub async fn delete_link(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>> {
    let Path(id) = id?;

    links::delete(&state.pool, id).await?;

    Ok(Json(json!({ "message": "link deleted" })))
}

/// GET /users/:id/links
/// The dedicated lookup for a user's links, ordered by id
pub async fn get_links_by_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Link>>> {
    let Path(user_id) = id?;

    let links = links::get_by_user_id(&state.pool, user_id).await?;

    Ok(Json(links))
}
