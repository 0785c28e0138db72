//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring, and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::application::services::{
    AccessGuard, AuthService, LinkService, PasswordHasher, TokenService,
};
use crate::domain::clock::SystemClock;
use crate::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use jsonwebtoken::Algorithm;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Service graph (auth, links, access guard)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let algorithm: Algorithm = config
        .jwt_algorithm
        .parse()
        .context("Unsupported JWT_ALGORITHM")?;

    let clock = Arc::new(SystemClock);
    let pool = Arc::new(pool);

    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));

    let token_service = Arc::new(TokenService::new(
        &config.jwt_secret,
        algorithm,
        config.jwt_exp_minutes,
        clock.clone(),
    ));

    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        PasswordHasher::new(),
        token_service.clone(),
    ));

    let link_service = Arc::new(LinkService::new(
        link_repository,
        clock,
        config.link_ttl_hours,
    ));

    let access_guard = Arc::new(AccessGuard::new(token_service, user_repository));

    let state = AppState {
        db: pool,
        auth_service,
        link_service,
        access_guard,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
