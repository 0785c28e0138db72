//! Alias creation, resolution, and owner-scoped management.

use chrono::Duration;
use serde_json::json;
use std::sync::Arc;

use crate::application::services::access_guard::require_ownership;
use crate::domain::clock::Clock;
use crate::domain::entities::{Link, NewLink, User};
use crate::domain::repositories::{LinkRepository, LinkStats};
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};
use crate::utils::url_normalizer::normalize_url;

/// Service for creating and resolving aliases.
///
/// Short codes are random candidates checked against the store; the
/// collision retry is transparent to callers. Expiry is evaluated at read
/// time against the injected clock and never written back.
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
    clock: Arc<dyn Clock>,
    link_ttl: Duration,
    code_length: usize,
}

impl<L: LinkRepository> LinkService<L> {
    pub fn new(repository: Arc<L>, clock: Arc<dyn Clock>, link_ttl_hours: i64) -> Self {
        Self {
            repository,
            clock,
            link_ttl: Duration::hours(link_ttl_hours),
            code_length: DEFAULT_CODE_LENGTH,
        }
    }

    /// Creates an alias for `target_url` owned by `owner_id`.
    ///
    /// The URL is normalized before storage. A fresh code is generated on
    /// every attempt; both a pre-check hit and an insert-time unique
    /// violation count as collisions and retry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not an absolute
    /// HTTP(S) URL, [`AppError::Internal`] if no unique code is found
    /// within the attempt limit or on database errors.
    pub async fn create_alias(&self, target_url: &str, owner_id: i64) -> Result<Link, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        let normalized_url = normalize_url(target_url).map_err(|e| {
            AppError::validation("Invalid target URL", json!({ "reason": e.to_string() }))
        })?;

        for _ in 0..MAX_ATTEMPTS {
            let short_code = generate_code(self.code_length);

            if self.repository.find_by_code(&short_code).await?.is_some() {
                continue;
            }

            let created_at = self.clock.now();
            let new_link = NewLink {
                short_code,
                target_url: normalized_url.clone(),
                owner_id,
                created_at,
                expires_at: created_at + self.link_ttl,
            };

            match self.repository.insert(new_link).await {
                Ok(link) => {
                    tracing::debug!(code = %link.short_code, owner_id, "alias created");
                    return Ok(link);
                }
                // Lost the insert race to a concurrent writer: fresh candidate.
                Err(e) if e.is_unique_violation() => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves a short code to its link, counting the access.
    ///
    /// The click increment happens atomically at the store and only after
    /// the liveness checks pass; rejected resolutions never count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Gone`] for codes that exist but are inactive or expired.
    pub async fn resolve(&self, short_code: &str) -> Result<Link, AppError> {
        let link = self
            .repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| link_not_found(short_code))?;

        if !link.is_resolvable(self.clock.now()) {
            return Err(AppError::gone(
                "Link is inactive or expired",
                json!({ "code": short_code }),
            ));
        }

        self.repository
            .register_click(short_code)
            .await?
            .ok_or_else(|| link_not_found(short_code))
    }

    /// Deactivates an alias on behalf of `caller`.
    ///
    /// Ownership is checked before liveness, so a non-owner always sees 403
    /// regardless of the alias state. Repeat deactivation is a successful
    /// no-op returning the stored state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Forbidden`] when `caller` does not own the alias.
    pub async fn deactivate(&self, short_code: &str, caller: &User) -> Result<Link, AppError> {
        let link = self
            .repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| link_not_found(short_code))?;

        require_ownership(link.owner_id, caller)?;

        if !link.is_active {
            return Ok(link);
        }

        self.repository
            .deactivate(short_code)
            .await?
            .ok_or_else(|| link_not_found(short_code))
    }

    /// Lists aliases owned by `owner_id` in stable creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_for_owner(
        &self,
        owner_id: i64,
        is_active: Option<bool>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Link>, AppError> {
        self.repository
            .list_by_owner(owner_id, is_active, skip, limit)
            .await
    }

    /// Returns the stats projection over all of the owner's aliases,
    /// expired ones included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn stats_for_owner(&self, owner_id: i64) -> Result<Vec<LinkStats>, AppError> {
        self.repository.stats_by_owner(owner_id).await
    }
}

fn link_not_found(short_code: &str) -> AppError {
    AppError::not_found("Link not found", json!({ "code": short_code }))
}
