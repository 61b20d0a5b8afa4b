//! Admin API client configuration.

use serde::{Deserialize, Serialize};

/// Admin API client configuration.
///
/// Passed explicitly into [`crate::AdminClient::new`]; nothing here is
/// process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the admin service
    pub base_url: String,
    /// Maximum attempts per remote call
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Per-attempt timeout in seconds
    #[serde(default = "default_attempt_timeout_secs")]
    pub attempt_timeout_secs: u64,
    /// Backoff base unit in milliseconds
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,
}

fn default_max_attempts() -> u32 {
    3
}

// 120 minutes: a full-table vacuum can legitimately run this long and
// the client must not abort it.
fn default_attempt_timeout_secs() -> u64 {
    7200
}

fn default_backoff_base_ms() -> u64 {
    1000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            max_attempts: default_max_attempts(),
            attempt_timeout_secs: default_attempt_timeout_secs(),
            backoff_base_ms: default_backoff_base_ms(),
        }
    }
}
