//! Mapping between abstraction types and Gemini types

use std::time::Duration;

use crate::llm::core::{config::GenerationConfig, error::LlmError};

use super::types::{
    Content, ErrorEnvelope, GeminiGenerationConfig, GenerateContentRequest,
    GenerateContentResponse, Part,
};

/// Build a single-turn Gemini request for a prompt
pub fn to_gemini_request(prompt: &str, config: &GenerationConfig) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![Part::text(prompt)],
        }],
        generation_config: if config.is_empty() {
            None
        } else {
            Some(to_gemini_generation_config(config))
        },
    }
}

/// Convert generation config to Gemini's format
fn to_gemini_generation_config(config: &GenerationConfig) -> GeminiGenerationConfig {
    GeminiGenerationConfig {
        max_output_tokens: config.max_tokens,
        temperature: config.temperature,
        top_p: config.top_p,
        top_k: config.top_k,
    }
}

/// Extract the answer text from a Gemini response
///
/// Text parts of the first candidate are concatenated; reasoning parts are
/// skipped.
pub fn from_gemini_response(response: GenerateContentResponse) -> Result<String, LlmError> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        return Err(LlmError::EmptyResponse(format!("prompt blocked ({})", reason)));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::EmptyResponse("no candidates returned".to_string()))?;

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter(|part| part.thought != Some(true))
        .filter_map(|part| part.text)
        .collect();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(LlmError::EmptyResponse(format!(
            "no text in candidate (finish reason {})",
            reason
        )));
    }

    Ok(text)
}

/// Map a non-success response to an error
pub fn from_error_response(status: u16, retry_after: Option<Duration>, body: String) -> LlmError {
    match status {
        401 | 403 => {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            LlmError::AuthenticationError(message)
        }
        429 => LlmError::RateLimitExceeded { retry_after },
        _ => match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => LlmError::ProviderError {
                code: if envelope.error.status.is_empty() {
                    status.to_string()
                } else {
                    envelope.error.status
                },
                message: envelope.error.message,
            },
            Err(_) => LlmError::HttpError { status, body },
        },
    }
}
