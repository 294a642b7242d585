//! Healthcheck response model.

use serde::{Deserialize, Serialize};

/// Status reported by `GET /healthcheck`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Service status, `"good"` when the API is up
    pub status: String,
}

impl HealthStatus {
    /// Returns `true` if the API reports itself healthy.
    pub fn is_good(&self) -> bool {
        self.status == "good"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status() {
        let health: HealthStatus = serde_json::from_str(r#"{"status":"good"}"#).unwrap();
        assert!(health.is_good());

        let health: HealthStatus =
            serde_json::from_str(r#"{"status":"degraded","version":"2"}"#).unwrap();
        assert!(!health.is_good());
    }
}
