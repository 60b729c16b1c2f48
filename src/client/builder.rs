use crate::client::core::GeminiClient;
use crate::config::{KeyCheckConfig, DEFAULT_BASE_URL};
use crate::credential::ApiKey;
use crate::drivers::GeminiDriver;
use crate::transport::HttpTransport;
use crate::Result;
use std::time::Duration;

/// Builder for [`GeminiClient`].
///
/// Keep this surface area small: the base URL, an optional timeout, an optional proxy.
#[derive(Debug, Clone, Default)]
pub struct GeminiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    proxy: Option<String>,
}

impl GeminiClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the transport settings of a [`KeyCheckConfig`].
    pub fn from_config(config: &KeyCheckConfig) -> Self {
        Self {
            base_url: Some(config.base_url.clone()),
            timeout: config.timeout,
            proxy: config.proxy.clone(),
        }
    }

    /// Override the API root, including the version segment.
    ///
    /// Primarily for testing with mock servers.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Route requests through an HTTP(S) proxy. Overrides `AI_PROXY_URL`.
    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy = Some(proxy_url.into());
        self
    }

    /// Build the client. The key is consumed here and lives only inside the client.
    pub fn build(self, api_key: ApiKey, model: &str) -> Result<GeminiClient> {
        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let transport = HttpTransport::new(base_url, api_key, self.timeout, self.proxy.as_deref())?;
        Ok(GeminiClient {
            transport,
            driver: GeminiDriver::new(),
            model: model.to_string(),
        })
    }
}
