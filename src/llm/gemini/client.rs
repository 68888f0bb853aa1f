//! Gemini client implementation

use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::Client;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

use crate::llm::core::{config::GenerationConfig, error::LlmError, provider::LlmProvider};

use super::mapper::{from_error_response, from_gemini_response, to_gemini_request};
use super::types::GenerateContentResponse;

/// Base URL of the Generative Language API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini model identifiers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GeminiModel {
    /// Gemini 2.5 Pro
    Gemini25Pro,
    /// Gemini 2.5 Flash
    #[default]
    Gemini25Flash,
    /// Gemini 2.5 Flash Lite
    Gemini25FlashLite,
}

impl GeminiModel {
    /// Get the model identifier string
    pub fn as_str(&self) -> &str {
        match self {
            GeminiModel::Gemini25Pro => "gemini-2.5-pro",
            GeminiModel::Gemini25Flash => "gemini-2.5-flash",
            GeminiModel::Gemini25FlashLite => "gemini-2.5-flash-lite",
        }
    }
}

impl FromStr for GeminiModel {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini-2.5-pro" => Ok(GeminiModel::Gemini25Pro),
            "gemini-2.5-flash" => Ok(GeminiModel::Gemini25Flash),
            "gemini-2.5-flash-lite" => Ok(GeminiModel::Gemini25FlashLite),
            other => Err(LlmError::ProviderError {
                code: "unknown_model".to_string(),
                message: format!("unsupported Gemini model '{}'", other),
            }),
        }
    }
}

/// Client for Gemini models authenticated with an API key
pub struct GeminiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key sent with every request
    api_key: String,
    /// API base URL, without trailing slash
    base_url: String,
    /// Model to use
    model: GeminiModel,
    /// Generation parameters applied to every request
    generation_config: GenerationConfig,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Arguments
    ///
    /// * `api_key` - Generative Language API key
    /// * `model` - Gemini model to use
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, model: GeminiModel) -> Result<Self, LlmError> {
        Self::build(api_key.into(), model, Duration::from_secs(120))
    }

    /// Create a client whose requests time out after `timeout`
    pub fn with_timeout(
        api_key: impl Into<String>,
        model: GeminiModel,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Self::build(api_key.into(), model, timeout)
    }

    fn build(api_key: String, model: GeminiModel, timeout: Duration) -> Result<Self, LlmError> {
        if api_key.trim().is_empty() {
            return Err(LlmError::AuthenticationError(
                "Gemini API key is empty".to_string(),
            ));
        }

        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
            generation_config: GenerationConfig::default(),
        })
    }

    /// Point the client at a different API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the generation parameters
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = config;
        self
    }

    /// Build the endpoint URL for non-streaming generation
    fn build_endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url,
            self.model.as_str()
        )
    }

    async fn make_request(&self, prompt: &str) -> Result<String, LlmError> {
        let gemini_request = to_gemini_request(prompt, &self.generation_config);

        let url = self.build_endpoint_url();
        debug!(model = self.model.as_str(), prompt_len = prompt.len(), "calling Gemini");

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&gemini_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs);
            let body = response.text().await.unwrap_or_default();
            return Err(from_error_response(status.as_u16(), retry_after, body));
        }

        let body = response.bytes().await?;
        let gemini_response: GenerateContentResponse = serde_json::from_slice(&body)?;

        if let Some(usage) = &gemini_response.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                answer_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "Gemini token usage"
            );
        }

        from_gemini_response(gemini_response)
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.make_request(prompt).await
    }
}
