//! Client configuration options.

use std::time::Duration;

/// Configuration for the Wealthsimple client.
///
/// # Example
///
/// ```
/// use wealthsimple_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Overrides the environment's API host (proxies, mock servers)
    pub base_url: Option<String>,
    /// Pre-built transport; `timeout` and `user_agent` are ignored when set
    pub http_client: Option<reqwest::Client>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("wealthsimple-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            base_url: None,
            http_client: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Send requests to `base_url` instead of the environment's host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use an existing `reqwest::Client` as the transport.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub(crate) fn build_http_client(&self) -> reqwest::Result<reqwest::Client> {
        match &self.http_client {
            Some(client) => Ok(client.clone()),
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .user_agent(&self.user_agent)
                .build(),
        }
    }
}
