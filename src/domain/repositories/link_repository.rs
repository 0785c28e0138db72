//! Repository trait for alias data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Per-link projection returned by the stats query.
#[derive(Debug, Clone, FromRow)]
pub struct LinkStats {
    pub short_code: String,
    pub target_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Repository interface for alias records.
///
/// Query parameters are explicit and typed; there is no generic
/// attribute-based filter.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new alias record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists
    /// (the caller's collision retry loop depends on this).
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds an alias by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Sets `is_active = false` and returns the updated record.
    ///
    /// Returns `Ok(None)` if no alias matches the code. Deactivating an
    /// already-inactive alias is a no-op that returns the stored state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn deactivate(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments `click_count` in a single statement and returns
    /// the updated record, or `Ok(None)` if the code is unknown.
    ///
    /// Concurrent calls must never lose an increment; the naive
    /// read-then-write sequence is not an acceptable implementation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn register_click(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists aliases owned by `owner_id` in stable creation order, with an
    /// optional activity filter and offset/limit pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_owner(
        &self,
        owner_id: i64,
        is_active: Option<bool>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Link>, AppError>;

    /// Returns the stats projection for every alias owned by `owner_id`,
    /// expired ones included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn stats_by_owner(&self, owner_id: i64) -> Result<Vec<LinkStats>, AppError>;
}
