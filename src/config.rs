//! Environment-driven settings for a key check.
//!
//! Every knob has a fixed default; the environment only overrides it.

use crate::credential::{self, ApiKey, CredentialSource};
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const PROMPT: &str = "Say 'API key works!' and nothing else.";

/// Settings for one key check.
#[derive(Debug, Clone)]
pub struct KeyCheckConfig {
    pub api_key: Option<ApiKey>,
    pub credential_source: Option<CredentialSource>,
    pub model: String,
    pub prompt: String,
    pub base_url: String,
    /// `None` leaves the transport default (no timeout) in place.
    pub timeout: Option<Duration>,
    pub proxy: Option<String>,
}

impl Default for KeyCheckConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            credential_source: None,
            model: DEFAULT_MODEL.to_string(),
            prompt: PROMPT.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            proxy: None,
        }
    }
}

impl KeyCheckConfig {
    /// Read settings from the process environment and the OS keyring.
    pub fn from_env() -> Self {
        Self::from_sources(credential::from_keyring(), |k| std::env::var(k).ok())
    }

    /// Read settings through `lookup` only. The keyring is not consulted.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_sources(None, lookup)
    }

    fn from_sources<F>(keyring_key: Option<ApiKey>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let (api_key, credential_source) = match credential::resolve(keyring_key, &lookup) {
            Some((key, source)) => (Some(key), Some(source)),
            None => (None, None),
        };

        let timeout = lookup("AI_HTTP_TIMEOUT_SECS").and_then(|s| match s.trim().parse::<u64>() {
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(_) => {
                warn!(value = s.as_str(), "ignoring unparsable AI_HTTP_TIMEOUT_SECS");
                None
            }
        });

        Self {
            api_key,
            credential_source,
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            prompt: PROMPT.to_string(),
            base_url: lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout,
            proxy: lookup("AI_PROXY_URL"),
        }
    }

    pub fn with_api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
