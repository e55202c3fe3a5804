//! Client configuration

use std::time::Duration;

/// Server used when nothing else is configured
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8888";

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the server URL
pub const SERVER_URL_ENV: &str = "TRIGCTL_SERVER";

/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_ENV: &str = "TRIGCTL_TIMEOUT";

/// Connection settings for [`crate::TriggerApiClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_url(base_url.as_ref()),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Trim whitespace and trailing slashes, default the scheme to http
fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}
