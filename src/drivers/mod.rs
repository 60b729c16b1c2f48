//! Provider 驱动 — 请求体构造与响应解析
//!
//! Provider drivers translate between the client and a provider's wire format.
//! Only the Gemini generateContent style is needed here.

pub mod gemini;

pub use gemini::GeminiDriver;
