use crate::drivers::GeminiDriver;
use crate::transport::{HttpTransport, TransportError};
use crate::types::GenerateContentResponse;
use crate::{Error, Result};
use std::time::Instant;
use tracing::{debug, info};

/// Authenticated handle to the Generative Language API, bound to one model.
pub struct GeminiClient {
    pub(crate) transport: HttpTransport,
    pub(crate) driver: GeminiDriver,
    pub(crate) model: String,
}

impl GeminiClient {
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one `generateContent` request carrying only `prompt`.
    pub async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse> {
        let url = self.transport.endpoint(self.driver.endpoint_segments(&self.model));
        let body = self.driver.build_request(prompt);
        let start = Instant::now();

        debug!(model = self.model.as_str(), endpoint = url.path(), "sending generateContent");

        let resp = match self.transport.post_json(url, &body).await {
            Ok(r) => r,
            Err(e) => {
                if let Error::Transport(ref t) = e {
                    info!(
                        timeout = t.is_timeout(),
                        connect = t.is_connect(),
                        model = self.model.as_str(),
                        duration_ms = start.elapsed().as_millis(),
                        "gemini-key-check request could not be sent"
                    );
                }
                return Err(e);
            }
        };
        let status = resp.status().as_u16();
        let text = resp
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        if !(200..300).contains(&status) {
            let err = self.driver.parse_error(status, &text);
            info!(
                http_status = status,
                error_kind = err.kind().name(),
                model = self.model.as_str(),
                duration_ms = start.elapsed().as_millis(),
                "gemini-key-check request failed"
            );
            return Err(err);
        }

        let parsed = self.driver.parse_response(&text)?;
        info!(
            http_status = status,
            model = self.model.as_str(),
            model_version = parsed.model_version.as_deref().unwrap_or("-"),
            duration_ms = start.elapsed().as_millis(),
            "gemini-key-check request succeeded"
        );
        if let Some(ref usage) = parsed.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                candidates_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "token usage"
            );
        }
        Ok(parsed)
    }
}
