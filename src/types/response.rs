//! `generateContent` response body

use serde::Deserialize;

/// Decoded `generateContent` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
    pub model_version: Option<String>,
    pub response_id: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, with its text parts joined in order.
    ///
    /// Thought parts are skipped. Returns `None` when the candidate carries
    /// no text at all (e.g. the prompt was blocked).
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let mut found = false;
        let mut out = String::new();
        for part in parts {
            if part.thought.unwrap_or(false) {
                continue;
            }
            if let Some(ref t) = part.text {
                found = true;
                out.push_str(t);
            }
        }
        found.then_some(out)
    }

    /// Finish reason of the first candidate, as sent (e.g. `STOP`, `SAFETY`).
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates.first()?.finish_reason.as_deref()
    }

    /// Block reason reported for the prompt, if any.
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
    pub index: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Part {
    pub text: Option<String>,
    pub thought: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// Token accounting. Fields missing from the body read as zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u64,
    #[serde(default)]
    pub candidates_token_count: u64,
    #[serde(default)]
    pub total_token_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(v: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_text_joins_parts_and_skips_thoughts() {
        let resp = decode(serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "thinking...", "thought": true},
                        {"text": "API key "},
                        {"text": "works!"}
                    ]
                },
                "finishReason": "STOP"
            }],
            "modelVersion": "gemini-2.5-flash-lite"
        }));
        assert_eq!(resp.text().as_deref(), Some("API key works!"));
        assert_eq!(resp.finish_reason(), Some("STOP"));
        assert_eq!(resp.model_version.as_deref(), Some("gemini-2.5-flash-lite"));
    }

    #[test]
    fn test_blocked_prompt_has_no_text() {
        let resp = decode(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"},
            "usageMetadata": {"promptTokenCount": 9, "totalTokenCount": 9}
        }));
        assert_eq!(resp.text(), None);
        assert_eq!(resp.block_reason(), Some("SAFETY"));
        let usage = resp.usage_metadata.unwrap();
        assert_eq!(usage.prompt_token_count, 9);
        assert_eq!(usage.candidates_token_count, 0);
    }

    #[test]
    fn test_empty_text_part_is_still_text() {
        let resp = decode(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": ""}]}}]
        }));
        assert_eq!(resp.text().as_deref(), Some(""));
    }
}
