//! Gemini generateContent 驱动 — 构造请求体并解析成功响应与错误信封
//!
//! Google Gemini generateContent API driver. Wire notes:
//! - Endpoint is `{base}/models/{model}:generateContent`.
//! - Body uses `contents` with `parts`; roles are `user` and `model`.
//! - A bare prompt carries no `generationConfig` and no `system_instruction`.
//! - Non-2xx bodies use the Google error envelope with RPC status and ErrorInfo reason.

use serde_json::Value;

use crate::error::Error;
use crate::error_code::ErrorKind;
use crate::types::{ErrorEnvelope, GenerateContentResponse};

const MODEL_PREFIX: &str = "models/";
const GENERATE_METHOD: &str = "generateContent";

#[derive(Debug, Clone, Copy, Default)]
pub struct GeminiDriver;

impl GeminiDriver {
    pub fn new() -> Self {
        Self
    }

    /// Path segments under the API root for `model`.
    ///
    /// Accepts both `gemini-2.5-flash` and the resource form `models/gemini-2.5-flash`.
    pub fn endpoint_segments(&self, model: &str) -> [String; 2] {
        let id = model.strip_prefix(MODEL_PREFIX).unwrap_or(model);
        ["models".to_string(), format!("{}:{}", id, GENERATE_METHOD)]
    }

    /// Build the request body for a single user prompt.
    pub fn build_request(&self, prompt: &str) -> Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
        })
    }

    /// Decode a 2xx body.
    pub fn parse_response(&self, body: &str) -> Result<GenerateContentResponse, Error> {
        Ok(serde_json::from_str(body)?)
    }

    /// Turn a non-2xx response into a classified [`Error::Remote`].
    ///
    /// Bodies that are not a Google error envelope are kept verbatim as the message.
    pub fn parse_error(&self, status: u16, body: &str) -> Error {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope { error }) => {
                let reason = error.reason().map(String::from);
                let kind = ErrorKind::classify(status, error.status.as_deref(), reason.as_deref());
                let message = if error.message.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    error.message
                };
                Error::Remote {
                    status,
                    kind,
                    provider_status: error.status,
                    reason,
                    message,
                }
            }
            Err(_) => {
                let trimmed = body.trim();
                Error::Remote {
                    status,
                    kind: ErrorKind::from_http_status(status),
                    provider_status: None,
                    reason: None,
                    message: if trimmed.is_empty() {
                        format!("HTTP {}", status)
                    } else {
                        trimmed.to_string()
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_build_request_is_bare() {
        let body = GeminiDriver::new().build_request("Hello");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Hello");
        assert!(body.get("generationConfig").is_none());
        assert!(body.get("system_instruction").is_none());
    }

    #[test]
    fn test_gemini_endpoint_strips_resource_prefix() {
        let driver = GeminiDriver::new();
        assert_eq!(
            driver.endpoint_segments("models/gemini-2.0-flash"),
            ["models".to_string(), "gemini-2.0-flash:generateContent".to_string()]
        );
        assert_eq!(
            driver.endpoint_segments("gemini-2.5-flash-lite")[1],
            "gemini-2.5-flash-lite:generateContent"
        );
    }

    #[test]
    fn test_gemini_parse_response() {
        let body = r#"{
            "candidates": [{"content": {"parts": [{"text": "API key works!"}], "role": "model"}, "finishReason": "STOP"}],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 4, "totalTokenCount": 14}
        }"#;
        let resp = GeminiDriver::new().parse_response(body).unwrap();
        assert_eq!(resp.text().as_deref(), Some("API key works!"));
        assert_eq!(resp.usage_metadata.unwrap().total_token_count, 14);
    }

    #[test]
    fn test_gemini_parse_response_garbage() {
        let err = GeminiDriver::new().parse_response("<html>").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.kind(), ErrorKind::Unknown);
    }

    #[test]
    fn test_gemini_parse_error_invalid_key() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT","details":[{"@type":"type.googleapis.com/google.rpc.ErrorInfo","reason":"API_KEY_INVALID","domain":"googleapis.com"}]}}"#;
        match GeminiDriver::new().parse_error(400, body) {
            Error::Remote {
                status,
                kind,
                provider_status,
                reason,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(kind, ErrorKind::Authentication);
                assert_eq!(provider_status.as_deref(), Some("INVALID_ARGUMENT"));
                assert_eq!(reason.as_deref(), Some("API_KEY_INVALID"));
                assert_eq!(message, "API key not valid. Please pass a valid API key.");
            }
            other => panic!("Expected Remote, got {:?}", other),
        }
    }

    #[test]
    fn test_gemini_parse_error_unknown_model() {
        let body = r#"{"error":{"code":404,"message":"models/gemini-9 is not found for API version v1beta","status":"NOT_FOUND"}}"#;
        let err = GeminiDriver::new().parse_error(404, body);
        assert_eq!(err.kind(), ErrorKind::InvalidModel);
    }

    #[test]
    fn test_gemini_parse_error_plain_body() {
        let err = GeminiDriver::new().parse_error(502, "  Bad Gateway\n");
        assert_eq!(err.kind(), ErrorKind::ServerError);
        assert!(err.to_string().ends_with(": Bad Gateway"));
    }

    #[test]
    fn test_gemini_parse_error_empty_body() {
        let err = GeminiDriver::new().parse_error(401, "");
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert!(err.to_string().ends_with(": HTTP 401"));
    }
}
