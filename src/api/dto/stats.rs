//! DTOs for the per-owner stats endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::repositories::LinkStats;

/// One stats row per alias: lifetime click count plus lifecycle timestamps.
#[derive(Debug, Serialize)]
pub struct LinkStatsResponse {
    pub short_code: String,
    pub target_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<LinkStats> for LinkStatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            short_code: stats.short_code,
            target_url: stats.target_url,
            click_count: stats.click_count,
            created_at: stats.created_at,
            expires_at: stats.expires_at,
        }
    }
}
