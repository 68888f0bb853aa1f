//! Shared application state and the ask pipeline

use tracing::info;

use crate::answer::AnswerService;
use crate::context::{build_context, ContextError};
use crate::member_messages::MemberMessagesClient;

/// Handles built once at startup and shared by every request
#[derive(Clone)]
pub struct AppState {
    pub messages: MemberMessagesClient,
    pub answers: AnswerService,
    /// Page size used when fetching member messages for a question
    pub page_size: u32,
}

impl AppState {
    pub fn new(messages: MemberMessagesClient, answers: AnswerService, page_size: u32) -> Self {
        Self {
            messages,
            answers,
            page_size,
        }
    }

    /// Fetch all member messages, build the context and ask the model
    ///
    /// Fetch and model failures are already folded into the result; only a
    /// malformed message record makes this return an error.
    pub async fn ask(&self, question: &str) -> Result<String, ContextError> {
        let messages = self.messages.fetch_all(self.page_size).await;
        let context = build_context(&messages)?;
        info!(messages = messages.len(), context_len = context.len(), "context built");

        Ok(self.answers.answer(question, &context).await)
    }
}
