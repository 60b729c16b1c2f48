use crate::credential::ApiKey;
use crate::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Proxy;
use std::time::Duration;
use url::Url;

use super::TransportError;

/// Header that carries the API key. Keeping the key out of the query string
/// keeps it out of reqwest error messages, which include the URL.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

/// A client that cannot be built (TLS backend, resolver) is a local setup problem.
fn client_init_error(e: impl std::fmt::Display) -> Error {
    Error::configuration(format!("failed to initialise HTTP client: {}", e))
}

impl HttpTransport {
    pub fn new(
        base_url: &str,
        api_key: ApiKey,
        timeout: Option<Duration>,
        proxy: Option<&str>,
    ) -> Result<Self> {
        let base_url = Self::parse_base_url(base_url)?;

        let mut key = HeaderValue::from_str(api_key.expose()).map_err(|_| {
            Error::configuration("API key contains characters that cannot be sent in an HTTP header")
        })?;
        key.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }

        if let Some(proxy_url) = proxy {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_hint(
                    format!("invalid proxy URL '{}': {}", proxy_url, e),
                    "check AI_PROXY_URL",
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(client_init_error)?;

        Ok(Self { client, base_url })
    }

    fn parse_base_url(raw: &str) -> Result<Url> {
        let url = Url::parse(raw).map_err(|e| {
            Error::configuration_with_hint(
                format!("invalid base URL '{}': {}", raw, e),
                "check GEMINI_BASE_URL",
            )
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::configuration_with_hint(
                format!("base URL '{}' cannot carry a path", raw),
                "check GEMINI_BASE_URL",
            ));
        }
        Ok(url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL. Segments are percent-encoded.
    pub fn endpoint<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub async fn post_json(&self, url: Url, body: &serde_json::Value) -> Result<reqwest::Response> {
        self.client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))
    }
}
