//! API key handling.
//!
//! The key is looked up in the OS keyring first, then in the environment.
//! It is never printed: both `Debug` and `Display` are redacted.

use keyring::Entry;
use std::fmt;
use tracing::{debug, warn};

/// Keyring service name the key is stored under.
pub const KEYRING_SERVICE: &str = "gemini-key-check";
/// Keyring user name the key is stored under.
pub const KEYRING_USER: &str = "gemini";

/// Environment variables consulted, highest precedence first.
pub const ENV_VARS: [&str; 2] = ["GOOGLE_API_KEY", "GEMINI_API_KEY"];

/// An opaque API key. No format validation is applied.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Where a key was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Keyring,
    Env(&'static str),
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Keyring => write!(f, "keyring ({}/{})", KEYRING_SERVICE, KEYRING_USER),
            CredentialSource::Env(var) => write!(f, "environment ({})", var),
        }
    }
}

/// Read the key from the OS keyring. Any keyring failure counts as "absent".
pub fn from_keyring() -> Option<ApiKey> {
    let entry = match Entry::new(KEYRING_SERVICE, KEYRING_USER) {
        Ok(e) => e,
        Err(e) => {
            debug!(error = %e, "keyring unavailable");
            return None;
        }
    };
    match entry.get_password() {
        Ok(key) => Some(ApiKey::new(key)),
        Err(e) => {
            debug!(error = %e, "no API key in keyring");
            None
        }
    }
}

/// Read the key through `lookup`, which maps a variable name to its value.
///
/// A variable that is set but empty still counts as present.
pub fn from_env_lookup<F>(lookup: F) -> Option<(ApiKey, CredentialSource)>
where
    F: Fn(&str) -> Option<String>,
{
    let found: Vec<(&'static str, String)> = ENV_VARS
        .iter()
        .filter_map(|&var| lookup(var).map(|v| (var, v)))
        .collect();

    if found.len() > 1 {
        warn!(
            using = found[0].0,
            ignored = found[1].0,
            "both API key variables are set; using the first"
        );
    }

    found
        .into_iter()
        .next()
        .map(|(var, key)| (ApiKey::new(key), CredentialSource::Env(var)))
}

/// Resolve a key: keyring first, then the environment.
pub fn resolve<F>(keyring_key: Option<ApiKey>, lookup: F) -> Option<(ApiKey, CredentialSource)>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = keyring_key {
        return Some((key, CredentialSource::Keyring));
    }
    from_env_lookup(lookup)
}
