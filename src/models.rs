// Data structures (member messages, ask requests and responses)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// One record from the member messages API. Fields accept any JSON value so a
// single odd record never fails the whole page; absent or null fields are
// reported when the context is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MemberMessage {
    pub user_name: Option<Value>,
    pub message: Option<Value>,
}

impl MemberMessage {
    pub fn new(user_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_name: Some(Value::String(user_name.into())),
            message: Some(Value::String(message.into())),
        }
    }
}

// One page returned by the member messages API
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessagesPage {
    #[serde(default)]
    pub items: Option<Vec<MemberMessage>>,
}

// Form body of POST /ask
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AskForm {
    pub question: Option<String>,
}

// JSON body of POST /api/ask. Any value under `question` is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct AskRequest {
    pub question: Value,
}

impl AskRequest {
    /// Parse a request body; `None` unless it is a JSON object with a
    /// `question` key
    pub fn from_json(body: &[u8]) -> Option<Self> {
        let mut object: Map<String, Value> = serde_json::from_slice(body).ok()?;
        object.remove("question").map(|question| Self { question })
    }

    /// The question as prompt text: strings verbatim, other values as JSON
    pub fn question_text(&self) -> String {
        match &self.question {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
