//! Google API error envelope: `{"error": {"code", "message", "status", "details"}}`

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    /// Canonical RPC status, e.g. `INVALID_ARGUMENT`
    pub status: Option<String>,
    #[serde(default)]
    pub details: Vec<ErrorDetail>,
}

/// One entry of `details`. Only `google.rpc.ErrorInfo` carries `reason`;
/// other detail types decode with every field empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "@type")]
    pub type_url: Option<String>,
    pub reason: Option<String>,
    pub domain: Option<String>,
}

impl ErrorBody {
    /// First ErrorInfo reason in `details`.
    pub fn reason(&self) -> Option<&str> {
        self.details.iter().find_map(|d| d.reason.as_deref())
    }
}
