//! API route configuration.

use crate::api::handlers::{
    create_link_handler, deactivate_link_handler, list_links_handler, login_handler,
    register_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Registration and login routes, reachable without a token.
///
/// # Endpoints
///
/// - `POST /register` - Create an account
/// - `POST /login`    - Exchange credentials for a bearer token
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}

/// Alias management routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST /create`             - Create an alias
/// - `GET  /list`               - List the caller's aliases
/// - `GET  /stats`              - Click statistics for the caller's aliases
/// - `POST /{code}/deactivate`  - Deactivate an owned alias
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_link_handler))
        .route("/list", get(list_links_handler))
        .route("/stats", get(stats_handler))
        .route("/{code}/deactivate", post(deactivate_link_handler))
}
