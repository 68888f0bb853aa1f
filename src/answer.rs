//! Answer service
//!
//! Wraps an [`LlmProvider`] so that callers always receive displayable text.
//! Model failures are rendered as `"Error: <details>"` instead of being
//! returned as errors.

use std::sync::Arc;
use tracing::{info, warn};

use crate::context::build_prompt;
use crate::llm::LlmProvider;

#[derive(Clone)]
pub struct AnswerService {
    provider: Arc<dyn LlmProvider>,
}

impl AnswerService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Answer `question` using `context` as the only source material
    pub async fn answer(&self, question: &str, context: &str) -> String {
        let prompt = build_prompt(context, question);

        match self.provider.generate(&prompt).await {
            Ok(text) => {
                info!(answer_len = text.len(), "model answered");
                text
            }
            Err(e) => {
                warn!("model call failed: {}", e);
                format!("Error: {}", e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingProvider {
        prompts: Mutex<Vec<String>>,
        reply: Result<String, u16>,
    }

    #[async_trait]
    impl LlmProvider for RecordingProvider {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::HttpError {
                    status: *status,
                    body: "boom".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_answer_passes_prompt_and_returns_text() {
        let provider = Arc::new(RecordingProvider {
            prompts: Mutex::new(Vec::new()),
            reply: Ok("Sophia".to_string()),
        });
        let service = AnswerService::new(provider.clone());

        let answer = service.answer("Who said hi?", "A: hi").await;
        assert_eq!(answer, "Sophia");

        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(
            prompts[0],
            "Answer the following question based on the member messages:\n\nA: hi\n\nQuestion: Who said hi?"
        );
    }

    #[tokio::test]
    async fn test_answer_converts_failure_to_text() {
        let provider = Arc::new(RecordingProvider {
            prompts: Mutex::new(Vec::new()),
            reply: Err(500),
        });
        let service = AnswerService::new(provider);

        let answer = service.answer("Q", "").await;
        assert_eq!(answer, "Error: HTTP error (status 500): boom");
    }
}
