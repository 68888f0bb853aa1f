//! LLM Abstraction Layer
//!
//! A provider-neutral `LlmProvider` trait and the Google Gemini client used
//! to answer questions.

pub mod core;
pub mod gemini;

// Re-export commonly used types
pub use core::{config::GenerationConfig, error::LlmError, provider::LlmProvider};
pub use gemini::{GeminiClient, GeminiModel};
