//! Provider trait for LLM implementations

use async_trait::async_trait;

use super::error::LlmError;

/// Main interface that all LLM provider implementations must satisfy
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a complete text answer for a single prompt
    ///
    /// # Arguments
    /// * `prompt` - The full prompt text sent as one user turn
    ///
    /// # Returns
    /// The generated text, or an error if the request fails
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}
