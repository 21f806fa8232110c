// Shared transport configuration for building reqwest::Client instances.
//
// Keeps timeout, user-agent, and default-header settings out of the
// endpoint client so tests can substitute a pre-built reqwest::Client.

use std::time::Duration;

use reqwest::header::HeaderMap;

/// Transport configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout. Failures past this propagate immediately —
    /// there are no retries at this layer.
    pub timeout: Duration,
    /// Extra default headers applied to every request. These extend the
    /// defaults; `Content-Type: application/json` is always set on
    /// JSON-bodied requests and cannot be removed here.
    pub default_headers: Option<HeaderMap>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            default_headers: None,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("bookly/", env!("CARGO_PKG_VERSION")));

        if let Some(ref headers) = self.default_headers {
            builder = builder.default_headers(headers.clone());
        }

        builder.build().map_err(crate::error::Error::Transport)
    }

    /// Replace the timeout, builder-style.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
