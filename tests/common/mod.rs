#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use jsonwebtoken::Algorithm;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use url_alias::application::services::{
    AccessGuard, AuthService, LinkService, PasswordHasher, TokenService,
};
use url_alias::domain::clock::SystemClock;
use url_alias::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use url_alias::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-signing-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    let clock = Arc::new(SystemClock);

    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));

    let token_service = Arc::new(TokenService::new(
        TEST_JWT_SECRET,
        Algorithm::HS256,
        30,
        clock.clone(),
    ));

    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        PasswordHasher::new(),
        token_service.clone(),
    ));

    let link_service = Arc::new(LinkService::new(link_repository, clock, 24));

    let access_guard = Arc::new(AccessGuard::new(token_service, user_repository));

    AppState {
        db: pool,
        auth_service,
        link_service,
        access_guard,
    }
}

/// Full application router without the outer path-normalization wrapper,
/// which `TestServer` does not need.
pub fn test_app(state: AppState) -> Router {
    use axum::routing::get;
    use url_alias::api::handlers::{health_handler, redirect_handler};
    use url_alias::api::middleware::auth;
    use url_alias::api::routes::{auth_routes, link_routes};

    let link_router = link_routes().route_layer(axum::middleware::from_fn_with_state(
        state.clone(),
        auth::layer,
    ));

    Router::new()
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api/auth", auth_routes())
        .nest("/api/links", link_router)
        .with_state(state)
}

pub fn test_server(pool: PgPool) -> TestServer {
    TestServer::new(test_app(create_test_state(pool))).unwrap()
}

/// Registers a user and returns their id.
pub async fn register_user(server: &TestServer, username: &str, password: &str) -> i64 {
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": username, "password": password }))
        .await;

    response.json::<serde_json::Value>()["id"].as_i64().unwrap()
}

/// Logs a user in and returns the bearer token.
pub async fn login_user(server: &TestServer, username: &str, password: &str) -> String {
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "username": username, "password": password }))
        .await;

    response.json::<serde_json::Value>()["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Registers and logs in, returning (user_id, bearer_token).
pub async fn register_and_login(
    server: &TestServer,
    username: &str,
    password: &str,
) -> (i64, String) {
    let id = register_user(server, username, password).await;
    let token = login_user(server, username, password).await;
    (id, token)
}

/// Creates an alias through the API and returns its short code.
pub async fn create_alias(server: &TestServer, token: &str, target_url: &str) -> String {
    let response = server
        .post("/api/links/create")
        .authorization_bearer(token)
        .json(&json!({ "target_url": target_url }))
        .await;

    response.json::<serde_json::Value>()["short_code"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Inserts a user row directly, returning the id.
pub async fn insert_test_user(pool: &PgPool, username: &str) -> i64 {
    let hash = PasswordHasher::new().hash("test-password").unwrap();
    sqlx::query_scalar(
        "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(username)
    .bind(hash)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts an active link row expiring 24 hours from now.
pub async fn insert_test_link(pool: &PgPool, code: &str, url: &str, owner_id: i64) {
    sqlx::query(
        r#"
        INSERT INTO links (short_code, target_url, created_at, expires_at, owner_id)
        VALUES ($1, $2, NOW(), NOW() + INTERVAL '24 hours', $3)
        "#,
    )
    .bind(code)
    .bind(url)
    .bind(owner_id)
    .execute(pool)
    .await
    .unwrap();
}

/// Inserts a deactivated link row.
pub async fn insert_inactive_link(pool: &PgPool, code: &str, url: &str, owner_id: i64) {
    sqlx::query(
        r#"
        INSERT INTO links (short_code, target_url, is_active, created_at, expires_at, owner_id)
        VALUES ($1, $2, FALSE, NOW(), NOW() + INTERVAL '24 hours', $3)
        "#,
    )
    .bind(code)
    .bind(url)
    .bind(owner_id)
    .execute(pool)
    .await
    .unwrap();
}

/// Inserts a link row whose expiry is already in the past.
pub async fn insert_expired_link(pool: &PgPool, code: &str, url: &str, owner_id: i64) {
    sqlx::query(
        r#"
        INSERT INTO links (short_code, target_url, created_at, expires_at, owner_id)
        VALUES ($1, $2, NOW() - INTERVAL '25 hours', NOW() - INTERVAL '1 hour', $3)
        "#,
    )
    .bind(code)
    .bind(url)
    .bind(owner_id)
    .execute(pool)
    .await
    .unwrap();
}

/// Reads click_count straight from the database.
pub async fn get_click_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM links WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
