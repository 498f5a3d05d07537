/// API route modules
pub mod health;
pub mod links;
pub mod users;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Build the service router over `state`.
///
/// Path parameter `id` is parsed as an integer; a non-numeric value fails
/// the request before any handler logic runs.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(health::ping))
        // Users
        .route("/users/create", post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id/update", post(users::update_user))
        .route("/users/:id/delete", post(users::delete_user))
        .route("/users/:id/links", get(links::get_links_by_user))
        // Links
        .route("/links/create", post(links::create_link))
        .route("/links/:id", get(links::get_link))
        .route("/links/:id/update", post(links::update_link))
        .route("/links/:id/delete", post(links::delete_link))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
