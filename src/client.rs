//! Client for the Generative Language API.
//!
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;

pub use builder::GeminiClientBuilder;
pub use self::core::GeminiClient;
