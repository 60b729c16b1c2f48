use crate::error_code::ErrorKind;
use crate::transport::TransportError;
use thiserror::Error;

/// Unified error type for a key check.
/// Every failure the client can hit ends up in one of these variants, and
/// [`Error::kind`] folds them into the coarse [`ErrorKind`] taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_hint(.hint))]
    Configuration {
        message: String,
        hint: Option<String>,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Remote error: HTTP {status} ({}): {message}", format_class(.kind, .provider_status, .reason))]
    Remote {
        status: u16,
        kind: ErrorKind,
        /// RPC status from the error envelope, e.g. `INVALID_ARGUMENT`
        provider_status: Option<String>,
        /// ErrorInfo reason from the error envelope, e.g. `API_KEY_INVALID`
        reason: Option<String>,
        message: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_hint(hint: &Option<String>) -> String {
    hint.as_ref()
        .map(|h| format!(" (hint: {})", h))
        .unwrap_or_default()
}

fn format_class(kind: &ErrorKind, status: &Option<String>, reason: &Option<String>) -> String {
    let mut parts = vec![kind.name().to_string()];
    if let Some(s) = status {
        parts.push(s.clone());
    }
    if let Some(r) = reason {
        parts.push(r.clone());
    }
    parts.join(", ")
}

impl Error {
    /// Create a configuration error without a hint.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            hint: None,
        }
    }

    /// Create a configuration error with an actionable hint.
    pub fn configuration_with_hint(msg: impl Into<String>, hint: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            hint: Some(hint.into()),
        }
    }

    /// Coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration { .. } => ErrorKind::Configuration,
            Error::Transport(_) => ErrorKind::Network,
            Error::Remote { kind, .. } => *kind,
            Error::Decode(_) | Error::Io(_) => ErrorKind::Unknown,
        }
    }

    /// HTTP status for remote errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
