//! Link entity representing an alias→target mapping.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A short alias for a target URL, owned by the user who created it.
///
/// `is_active` only ever transitions true→false; `click_count` never
/// decreases. Expiry is evaluated at read time against an injected instant,
/// never written back to the record.
#[derive(Debug, Clone, FromRow)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub target_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: i64,
    pub owner_id: i64,
}

impl Link {
    /// Returns true if the link is past its expiry at the given instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Returns true if the link can serve a redirect at the given instant.
    pub fn is_resolvable(&self, now: DateTime<Utc>) -> bool {
        self.is_active && !self.is_expired(now)
    }
}

/// Input data for creating a new link.
///
/// Timestamps are supplied by the caller so the clock stays injectable.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub target_url: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn make_link(is_active: bool, expires_at: DateTime<Utc>) -> Link {
        let created_at = expires_at - Duration::hours(24);
        Link {
            id: 1,
            short_code: "abc123XY".to_string(),
            target_url: "https://example.com/".to_string(),
            is_active,
            created_at,
            expires_at,
            click_count: 0,
            owner_id: 42,
        }
    }

    #[test]
    fn test_link_not_expired_before_deadline() {
        let now = Utc::now();
        let link = make_link(true, now + Duration::hours(1));
        assert!(!link.is_expired(now));
        assert!(link.is_resolvable(now));
    }

    #[test]
    fn test_link_expired_at_deadline() {
        let now = Utc::now();
        let link = make_link(true, now);
        assert!(link.is_expired(now));
        assert!(!link.is_resolvable(now));
    }

    #[test]
    fn test_inactive_link_is_not_resolvable() {
        let now = Utc::now();
        let link = make_link(false, now + Duration::hours(1));
        assert!(!link.is_expired(now));
        assert!(!link.is_resolvable(now));
    }
}
