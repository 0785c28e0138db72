//! Stateless signed access tokens.
//!
//! Tokens are HMAC-signed JWTs carrying the user id as subject, an expiry,
//! and a type tag. Possession of a valid unexpired token is sufficient proof
//! of identity until natural expiry; there is no revocation list.

use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::error::AppError;

/// Type tag distinguishing access tokens from other token kinds.
pub const TOKEN_TYPE_ACCESS: &str = "access";

/// Claims embedded in an access token.
///
/// The claim set is a compatibility contract with any verifier sharing the
/// secret: `sub` is the string-encoded user id, `exp`/`iat` are Unix
/// timestamps.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub token_type: String,
}

/// Issues and verifies signed access tokens.
///
/// Secret, algorithm, and lifetime are injected at construction; the clock
/// stamps `iat`/`exp` so issuance is deterministic under test.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(
        secret: &str,
        algorithm: Algorithm,
        lifetime_minutes: i64,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            lifetime: Duration::minutes(lifetime_minutes),
            clock,
        }
    }

    /// Issues a signed token for the given user id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if encoding fails.
    pub fn issue(&self, subject_id: i64) -> Result<String, AppError> {
        let now = self.clock.now();
        let claims = AccessClaims {
            sub: subject_id.to_string(),
            exp: (now + self.lifetime).timestamp(),
            iat: now.timestamp(),
            token_type: TOKEN_TYPE_ACCESS.to_string(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key).map_err(|e| {
            AppError::internal("Token encoding failed", json!({ "reason": e.to_string() }))
        })
    }

    /// Verifies a token and returns the embedded user id.
    ///
    /// Malformed, tampered, expired, wrong-algorithm, wrong-type, and
    /// missing-subject tokens all collapse to the same
    /// [`AppError::Unauthorized`] outcome, never a partial result.
    pub fn decode(&self, token: &str) -> Result<i64, AppError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let data = decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| invalid_token())?;

        if data.claims.token_type != TOKEN_TYPE_ACCESS {
            return Err(invalid_token());
        }

        data.claims.sub.parse::<i64>().map_err(|_| invalid_token())
    }
}

fn invalid_token() -> AppError {
    AppError::unauthorized(
        "Wrong or expired token",
        json!({ "reason": "Token is invalid or expired" }),
    )
}
