//! Identity resolution and ownership enforcement.

use serde_json::json;
use std::sync::Arc;

use crate::application::services::token_service::TokenService;
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Derives the authenticated identity from a bearer token.
///
/// Decoding and subject resolution both fail with 401: an invalid token and
/// a token whose subject no longer exists (the user record was removed after
/// issuance) are equally unauthenticated.
pub struct AccessGuard<U: UserRepository> {
    token_service: Arc<TokenService>,
    repository: Arc<U>,
}

impl<U: UserRepository> AccessGuard<U> {
    pub fn new(token_service: Arc<TokenService>, repository: Arc<U>) -> Self {
        Self {
            token_service,
            repository,
        }
    }

    /// Resolves a bearer token to the user it identifies.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token does not verify or
    /// its subject does not resolve to an existing user.
    pub async fn resolve_identity(&self, token: &str) -> Result<User, AppError> {
        let subject_id = self.token_service.decode(token)?;

        self.repository
            .find_by_id(subject_id)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Wrong or expired token",
                    json!({ "reason": "Token subject no longer exists" }),
                )
            })
    }
}

/// Fails with [`AppError::Forbidden`] unless `identity` owns the resource.
pub fn require_ownership(owner_id: i64, identity: &User) -> Result<(), AppError> {
    if owner_id != identity.id {
        return Err(AppError::forbidden(
            "Do not have permission to perform this action",
            json!({}),
        ));
    }
    Ok(())
}
