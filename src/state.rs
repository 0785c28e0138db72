//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AccessGuard, AuthService, LinkService};
use crate::infrastructure::persistence::{PgLinkRepository, PgUserRepository};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub access_guard: Arc<AccessGuard<PgUserRepository>>,
}
