//! User entity holding the login credential.

use sqlx::FromRow;

/// A registered account.
///
/// `password_hash` is the Argon2id PHC string; the plaintext is never stored.
/// The hash must not leak through any API response; handlers project users
/// through DTOs that omit it.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}
