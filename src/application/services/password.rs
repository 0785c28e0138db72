//! One-way password credential hashing.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier, SaltString,
};
use serde_json::json;

use crate::error::AppError;

/// Argon2id password hasher.
///
/// Hashes carry their own salt and parameters in PHC string format, so
/// verification needs no server-side state beyond the stored hash.
/// Empty input is accepted; length policy belongs to the request boundary.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the hashing operation fails.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                AppError::internal("Password hashing failed", json!({ "reason": e.to_string() }))
            })
    }

    /// Verifies a plaintext password against a stored PHC hash.
    ///
    /// Returns `Ok(false)` on mismatch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the stored hash is not a valid
    /// PHC string.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            AppError::internal(
                "Stored password hash is malformed",
                json!({ "reason": e.to_string() }),
            )
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
