//! Registration and credential authentication.

use serde_json::json;
use std::sync::Arc;

use crate::application::services::password::PasswordHasher;
use crate::application::services::token_service::TokenService;
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for registering users and authenticating credentials.
///
/// Unknown-username and wrong-password failures are indistinguishable from
/// the outside: both surface as the same 400 response, and the expensive
/// hash work runs in both paths so response timing does not reveal whether
/// a username exists.
pub struct AuthService<U: UserRepository> {
    repository: Arc<U>,
    hasher: PasswordHasher,
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(repository: Arc<U>, hasher: PasswordHasher, token_service: Arc<TokenService>) -> Self {
        Self {
            repository,
            hasher,
            token_service,
        }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken,
    /// both via the pre-check and when a concurrent registration wins the
    /// insert race.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        if self.repository.find_by_username(username).await?.is_some() {
            return Err(username_taken(username));
        }

        let password_hash = self.hasher.hash(password)?;

        self.repository
            .insert(username, &password_hash)
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    username_taken(username)
                } else {
                    e
                }
            })
    }

    /// Verifies a username/password pair and returns the full user record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] with one uniform message for both
    /// unknown usernames and wrong passwords.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = self.repository.find_by_username(username).await? else {
            // Burn comparable hash time so the miss is not observable.
            let _ = self.hasher.hash(password)?;
            return Err(incorrect_credentials());
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(incorrect_credentials());
        }

        Ok(user)
    }

    /// Issues an access token for the given user id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if token encoding fails.
    pub fn issue_token(&self, user_id: i64) -> Result<String, AppError> {
        self.token_service.issue(user_id)
    }
}

fn username_taken(username: &str) -> AppError {
    AppError::conflict(
        "User with this username already exists",
        json!({ "username": username }),
    )
}

fn incorrect_credentials() -> AppError {
    AppError::bad_request("Incorrect username or password", json!({}))
}
