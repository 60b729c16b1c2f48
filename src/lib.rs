//! # gemini-key-check
//!
//! 验证 Gemini API 密钥是否可用：发送一次 generateContent 请求并报告结果。
//!
//! Verify that a Gemini API key authenticates against the Generative Language
//! API and that a named model answers.
//!
//! ## Overview
//!
//! A check is one round trip: resolve the key, build a client, send a fixed
//! prompt, and print either `SUCCESS: <text>` or `ERROR: <description>`.
//! Failures are typed ([`Error`], classified by [`ErrorKind`]) but never
//! escape the check; they are reported through the same printed line.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gemini_key_check::{key_check, KeyCheckConfig};
//!
//! #[tokio::main]
//! async fn main() -> gemini_key_check::Result<()> {
//!     let config = KeyCheckConfig::from_env();
//!     let outcome = key_check::run(config, &mut std::io::stdout()).await?;
//!     if let Some(kind) = outcome.error_kind() {
//!         eprintln!("failed: {}", kind);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`key_check`] | The check itself and its two-line report |
//! | [`credential`] | API key lookup (keyring, environment) and redaction |
//! | [`config`] | Environment-driven settings and defaults |
//! | [`client`] | `generateContent` client and builder |
//! | [`drivers`] | Gemini request/response wire format |
//! | [`transport`] | reqwest-based HTTP transport |
//! | [`types`] | Response and error envelope types |
//! | [`error_code`] | Error classification |

pub mod client;
pub mod config;
pub mod credential;
pub mod drivers;
pub mod error_code;
pub mod key_check;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{GeminiClient, GeminiClientBuilder};
pub use config::KeyCheckConfig;
pub use credential::{ApiKey, CredentialSource};
pub use error_code::ErrorKind;
pub use key_check::KeyCheckOutcome;
pub use types::GenerateContentResponse;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
