//! 错误分类：将 Gemini 的 HTTP 状态、RPC 状态与 ErrorInfo reason 归一为少量错误类别。
//!
//! Error classification for Generative Language API failures.
//!
//! Google reports errors at three levels of detail, which are consulted from
//! most to least specific:
//!
//! | Source | Example | Where |
//! |--------|---------|-------|
//! | ErrorInfo `reason` | `API_KEY_INVALID` | `error.details[].reason` |
//! | RPC `status` | `PERMISSION_DENIED` | `error.status` |
//! | HTTP status | `404` | response line |
//!
//! ## Example
//!
//! ```rust
//! use gemini_key_check::error_code::ErrorKind;
//!
//! let kind = ErrorKind::classify(400, Some("INVALID_ARGUMENT"), Some("API_KEY_INVALID"));
//! assert_eq!(kind, ErrorKind::Authentication);
//! assert_eq!(kind.name(), "authentication");
//! ```

use std::fmt;

/// Coarse category of a failed key check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Key missing, malformed, expired, revoked or not allowed to call the API
    Authentication,
    /// The requested model does not exist or is not served to this key
    InvalidModel,
    /// Request rate or billing quota exceeded
    QuotaExhausted,
    /// Connection, DNS, TLS or timeout failure before a response arrived
    Network,
    /// Request rejected for a reason unrelated to the key
    InvalidRequest,
    /// Provider-side failure
    ServerError,
    /// Local setup problem (no credential, bad proxy URL)
    Configuration,
    /// Anything that fits none of the above
    Unknown,
}

impl ErrorKind {
    /// Returns the snake_case name (e.g., `"invalid_model"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::InvalidModel => "invalid_model",
            Self::QuotaExhausted => "quota_exhausted",
            Self::Network => "network",
            Self::InvalidRequest => "invalid_request",
            Self::ServerError => "server_error",
            Self::Configuration => "configuration",
            Self::Unknown => "unknown",
        }
    }

    /// Maps a `google.rpc.ErrorInfo` reason string.
    pub fn from_reason(reason: &str) -> Option<Self> {
        let kind = match reason {
            "API_KEY_INVALID" | "API_KEY_EXPIRED" | "API_KEY_SERVICE_BLOCKED"
            | "API_KEY_HTTP_REFERRER_BLOCKED" | "API_KEY_IP_ADDRESS_BLOCKED"
            | "CONSUMER_INVALID" | "SERVICE_DISABLED" => Self::Authentication,
            "RATE_LIMIT_EXCEEDED" | "RESOURCE_EXHAUSTED" => Self::QuotaExhausted,
            _ => return None,
        };
        Some(kind)
    }

    /// Maps a canonical RPC status string (e.g., `"NOT_FOUND"`).
    pub fn from_rpc_status(status: &str) -> Option<Self> {
        let kind = match status {
            "UNAUTHENTICATED" | "PERMISSION_DENIED" => Self::Authentication,
            "NOT_FOUND" => Self::InvalidModel,
            "RESOURCE_EXHAUSTED" => Self::QuotaExhausted,
            "INVALID_ARGUMENT" | "FAILED_PRECONDITION" | "OUT_OF_RANGE" => Self::InvalidRequest,
            "INTERNAL" | "UNAVAILABLE" | "DEADLINE_EXCEEDED" => Self::ServerError,
            _ => return None,
        };
        Some(kind)
    }

    /// Maps an HTTP status code. Unmapped codes return `Unknown`.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidRequest,
            401 | 403 => Self::Authentication,
            404 => Self::InvalidModel,
            429 => Self::QuotaExhausted,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Classifies a remote failure, preferring the most specific signal.
    pub fn classify(http_status: u16, rpc_status: Option<&str>, reason: Option<&str>) -> Self {
        reason
            .and_then(Self::from_reason)
            .or_else(|| rpc_status.and_then(Self::from_rpc_status))
            .unwrap_or_else(|| Self::from_http_status(http_status))
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
