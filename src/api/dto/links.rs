//! DTOs for alias management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The target to alias (must be a valid absolute HTTP/HTTPS URL).
    #[validate(url(message = "Invalid URL format"))]
    pub target_url: String,
}

/// JSON representation of an alias. The owner id stays internal.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub short_code: String,
    pub target_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: i64,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            short_code: link.short_code,
            target_url: link.target_url,
            is_active: link.is_active,
            created_at: link.created_at,
            expires_at: link.expires_at,
            click_count: link.click_count,
        }
    }
}

/// Listing query parameters.
///
/// Uses `serde_with` to parse values from query strings.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListLinksParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub is_active: Option<bool>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub skip: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl ListLinksParams {
    /// Validates the parameters and converts to offset/limit.
    ///
    /// # Defaults
    ///
    /// - `skip`: 0
    /// - `limit`: 10 (maximum 100)
    pub fn validate_and_get_range(&self) -> Result<(i64, i64), String> {
        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(10);

        if limit == 0 {
            return Err("Limit must be greater than 0".to_string());
        }

        if limit > 100 {
            return Err("Limit must be at most 100".to_string());
        }

        Ok((skip as i64, limit as i64))
    }
}
