//! Context and prompt construction
//!
//! The context is the newline-joined rendering of the aggregated member
//! messages, one `"<user_name>: <message>"` line per message.

use serde_json::Value;
use thiserror::Error;

use crate::models::MemberMessage;

const PROMPT_PREAMBLE: &str = "Answer the following question based on the member messages:";

/// Errors raised while building the context
#[derive(Debug, Error, PartialEq)]
pub enum ContextError {
    /// A fetched record lacks a required field
    #[error("message {index} is missing field '{field}'")]
    MissingField { index: usize, field: &'static str },
}

/// Render messages as one line each, in order
pub fn build_context(messages: &[MemberMessage]) -> Result<String, ContextError> {
    let lines = messages
        .iter()
        .enumerate()
        .map(|(index, msg)| {
            let user_name = field_text(&msg.user_name).ok_or(ContextError::MissingField {
                index,
                field: "user_name",
            })?;
            let message = field_text(&msg.message).ok_or(ContextError::MissingField {
                index,
                field: "message",
            })?;
            Ok(format!("{}: {}", user_name, message))
        })
        .collect::<Result<Vec<_>, ContextError>>()?;

    Ok(lines.join("\n"))
}

// Strings render verbatim, other JSON values in their JSON form
fn field_text(value: &Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Combine the context and the user's question into the model prompt
pub fn build_prompt(context: &str, question: &str) -> String {
    format!("{}\n\n{}\n\nQuestion: {}", PROMPT_PREAMBLE, context, question)
}
