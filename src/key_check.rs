//! The key check: announce the model, make one round trip, report the result.
//!
//! Output is always exactly two lines on the given sink:
//!
//! ```text
//! Testing gemini-2.5-flash-lite...
//! SUCCESS: API key works!
//! ```
//!
//! or, for any failure at all,
//!
//! ```text
//! Testing gemini-2.5-flash-lite...
//! ERROR: Remote error: HTTP 400 (authentication, INVALID_ARGUMENT, API_KEY_INVALID): API key not valid. Please pass a valid API key.
//! ```
//!
//! Failures are returned as a [`KeyCheckOutcome`], never as `Err`. Only a
//! write failure on the sink itself is propagated.

use crate::client::GeminiClientBuilder;
use crate::config::KeyCheckConfig;
use crate::credential::{ENV_VARS, KEYRING_SERVICE, KEYRING_USER};
use crate::types::GenerateContentResponse;
use crate::{Error, ErrorKind, Result};
use std::io::Write;
use tracing::{debug, warn};

pub const SUCCESS_LABEL: &str = "SUCCESS:";
pub const ERROR_LABEL: &str = "ERROR:";
const NO_TEXT: &str = "<no text in response>";

/// Result of one key check.
#[derive(Debug)]
pub enum KeyCheckOutcome {
    Success {
        /// `None` when the model answered without any text (e.g. blocked prompt)
        text: Option<String>,
        model_version: Option<String>,
    },
    Failure(Error),
}

impl KeyCheckOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, KeyCheckOutcome::Success { .. })
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            KeyCheckOutcome::Failure(e) => Some(e),
            KeyCheckOutcome::Success { .. } => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error().map(Error::kind)
    }

    /// The result line, without a trailing newline.
    pub fn report_line(&self) -> String {
        match self {
            KeyCheckOutcome::Success { text, .. } => {
                format!("{} {}", SUCCESS_LABEL, single_line(text.as_deref().unwrap_or(NO_TEXT)))
            }
            KeyCheckOutcome::Failure(e) => format!("{} {}", ERROR_LABEL, single_line(&e.to_string())),
        }
    }
}

/// Collapse multi-line text into one line: each line trimmed, blank lines dropped.
fn single_line(text: &str) -> String {
    let flat: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    flat.join(" ")
}

/// Run the check described by `config`, writing the two report lines to `out`.
pub async fn run<W: Write>(config: KeyCheckConfig, out: &mut W) -> Result<KeyCheckOutcome> {
    writeln!(out, "Testing {}...", config.model)?;
    out.flush()?;

    let outcome = match round_trip(config).await {
        Ok(resp) => {
            let text = resp.text();
            if text.is_none() {
                warn!(
                    finish_reason = resp.finish_reason().unwrap_or("-"),
                    block_reason = resp.block_reason().unwrap_or("-"),
                    "model answered without text"
                );
            }
            KeyCheckOutcome::Success {
                text,
                model_version: resp.model_version,
            }
        }
        Err(e) => {
            debug!(error_kind = e.kind().name(), status = ?e.status(), "key check failed");
            KeyCheckOutcome::Failure(e)
        }
    };

    writeln!(out, "{}", outcome.report_line())?;
    out.flush()?;
    Ok(outcome)
}

async fn round_trip(mut config: KeyCheckConfig) -> Result<GenerateContentResponse> {
    let api_key = config.api_key.take().ok_or_else(|| {
        Error::configuration_with_hint(
            "no API key found",
            format!(
                "set {} or {}, or store the key in the OS keyring as service '{}', user '{}'",
                ENV_VARS[0], ENV_VARS[1], KEYRING_SERVICE, KEYRING_USER
            ),
        )
    })?;
    if let Some(source) = config.credential_source {
        debug!(source = %source, "using API key");
    }

    let client = GeminiClientBuilder::from_config(&config).build(api_key, &config.model)?;
    client.generate_content(&config.prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::ApiKey;

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(buf).lines().map(String::from).collect()
    }

    #[test]
    fn test_missing_key_reports_error_line() {
        let mut out = Vec::new();
        let cfg = KeyCheckConfig::from_lookup(|_| None);
        let outcome = tokio_test::block_on(run(cfg, &mut out)).unwrap();

        assert!(!outcome.is_success());
        assert_eq!(outcome.error_kind(), Some(ErrorKind::Configuration));
        let lines = lines(&out);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Testing gemini-2.5-flash-lite...");
        assert!(lines[1].starts_with("ERROR: Configuration error: no API key found"));
    }

    #[test]
    fn test_bad_base_url_reports_error_line() {
        let mut out = Vec::new();
        let cfg = KeyCheckConfig::default()
            .with_api_key(ApiKey::new("k"))
            .with_model("gemini-2.0-flash")
            .with_base_url("nowhere");
        let outcome = tokio_test::block_on(run(cfg, &mut out)).unwrap();

        assert_eq!(outcome.error_kind(), Some(ErrorKind::Configuration));
        let lines = lines(&out);
        assert_eq!(lines[0], "Testing gemini-2.0-flash...");
        assert!(lines[1].starts_with("ERROR: "));
    }

    #[test]
    fn test_report_line_without_text() {
        let outcome = KeyCheckOutcome::Success {
            text: None,
            model_version: None,
        };
        assert_eq!(outcome.report_line(), "SUCCESS: <no text in response>");
        assert!(outcome.error().is_none());
    }

    #[test]
    fn test_report_line_flattens_success_text() {
        let outcome = KeyCheckOutcome::Success {
            text: Some("API key\n  works!\n\n".into()),
            model_version: None,
        };
        assert_eq!(outcome.report_line(), "SUCCESS: API key works!");
    }
}
