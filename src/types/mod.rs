//! 类型模块：Gemini generateContent 响应体与 Google 错误信封。
//!
//! # Types Module
//!
//! Wire types for the Generative Language API, decoded with serde.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`GenerateContentResponse`] | Successful `generateContent` body |
//! | [`ErrorEnvelope`] | Google JSON error body for non-2xx responses |

pub mod error_envelope;
pub mod response;

pub use error_envelope::{ErrorBody, ErrorEnvelope};
pub use response::{Candidate, Content, GenerateContentResponse, Part, UsageMetadata};
