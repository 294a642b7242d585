//! OAuth token pairs and expiry checks.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// An access/refresh token pair as issued by `POST /oauth/token`.
///
/// The client never stores tokens; callers persist the pair and hand it back
/// in on every authenticated call. Extra fields in the token response
/// (`token_type`, `scope`, ...) are ignored.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Bearer token for authenticated requests
    pub access_token: String,
    /// Token used to obtain a new pair
    pub refresh_token: String,
    /// Issue time, in seconds since the Unix epoch
    pub created_at: i64,
    /// Lifetime of the access token, in seconds
    pub expires_in: i64,
}

impl TokenPair {
    /// Create a token pair.
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        created_at: i64,
        expires_in: i64,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            created_at,
            expires_in,
        }
    }

    /// End of the validity window, in milliseconds since the Unix epoch.
    pub fn expires_at_millis(&self) -> i64 {
        self.created_at
            .saturating_add(self.expires_in)
            .saturating_mul(1000)
    }

    /// End of the validity window.
    ///
    /// Returns `None` if the timestamp is out of chrono's range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.expires_at_millis()).single()
    }

    /// Check expiry against a given time, in milliseconds since the epoch.
    ///
    /// The access token is valid while `now_millis` is at or before the end
    /// of its window.
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        self.expires_at_millis() < now_millis
    }

    /// Check expiry against the current wall-clock time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(created_at: i64, expires_in: i64) -> TokenPair {
        TokenPair::new("access", "refresh", created_at, expires_in)
    }

    #[test]
    fn test_expiry_boundary() {
        let tokens = pair(1_700_000_000, 3600);
        let end = 1_700_003_600_000;

        assert!(!tokens.is_expired_at(end - 1));
        assert!(!tokens.is_expired_at(end));
        assert!(tokens.is_expired_at(end + 1));
    }

    #[test]
    fn test_is_expired_uses_wall_clock() {
        let now = Utc::now().timestamp();
        assert!(pair(now - 7200, 3600).is_expired());
        assert!(!pair(now, 3600).is_expired());
    }

    #[test]
    fn test_expires_at() {
        let tokens = pair(1_700_000_000, 60);
        assert_eq!(
            tokens.expires_at().map(|t| t.timestamp()),
            Some(1_700_000_060)
        );
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let tokens = pair(i64::MAX, i64::MAX);
        assert!(!tokens.is_expired_at(i64::MAX));
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let tokens: TokenPair = serde_json::from_value(serde_json::json!({
            "access_token": "a",
            "refresh_token": "r",
            "created_at": 1_700_000_000,
            "expires_in": 7200,
            "token_type": "bearer",
            "resource_owner_id": "user-1",
        }))
        .unwrap();
        assert_eq!(tokens, TokenPair::new("a", "r", 1_700_000_000, 7200));
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let debug_str = format!("{:?}", TokenPair::new("super-secret", "also-secret", 0, 0));
        assert!(!debug_str.contains("super-secret"));
        assert!(!debug_str.contains("also-secret"));
        assert!(debug_str.contains("REDACTED"));
    }
}
