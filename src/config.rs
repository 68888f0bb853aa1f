//! Startup configuration read from the environment

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::llm::gemini::{GeminiModel, DEFAULT_BASE_URL};
use crate::member_messages::{
    MemberMessagesConfig, DEFAULT_ENDPOINT, DEFAULT_MAX_PAGES, INTERACTIVE_PAGE_SIZE,
};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

/// Process-wide settings, loaded once before the server starts
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_model: GeminiModel,
    pub gemini_base_url: String,
    pub llm_timeout: Duration,
    pub messages_endpoint: String,
    pub fetch_timeout: Duration,
    pub page_size: u32,
    pub max_pages: usize,
    pub host: IpAddr,
    pub port: u16,
}

impl AppConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let gemini_api_key = var("GEMINI_API_KEY").ok_or(ConfigError::MissingVar("GEMINI_API_KEY"))?;

        let gemini_model = match var("GEMINI_MODEL") {
            Some(model) => GeminiModel::from_str(&model).map_err(|e| ConfigError::InvalidVar {
                name: "GEMINI_MODEL",
                reason: e.to_string(),
            })?,
            None => GeminiModel::default(),
        };

        let page_size: u32 = non_zero("PAGE_SIZE", parse_var(&var, "PAGE_SIZE", INTERACTIVE_PAGE_SIZE)?)?;
        let max_pages: usize = non_zero("MAX_PAGES", parse_var(&var, "MAX_PAGES", DEFAULT_MAX_PAGES)?)?;
        let llm_timeout_secs: u64 =
            non_zero("LLM_TIMEOUT_SECS", parse_var(&var, "LLM_TIMEOUT_SECS", 120)?)?;
        let fetch_timeout_secs: u64 =
            non_zero("FETCH_TIMEOUT_SECS", parse_var(&var, "FETCH_TIMEOUT_SECS", 30)?)?;

        Ok(Self {
            gemini_api_key,
            gemini_model,
            gemini_base_url: var("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            messages_endpoint: var("MEMBER_MESSAGES_API")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            fetch_timeout: Duration::from_secs(fetch_timeout_secs),
            page_size,
            max_pages,
            host: parse_var(&var, "HOST", IpAddr::from([0, 0, 0, 0]))?,
            port: parse_var(&var, "PORT", 5000)?,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn member_messages(&self) -> MemberMessagesConfig {
        MemberMessagesConfig::new(self.messages_endpoint.clone())
            .with_request_timeout(self.fetch_timeout)
            .with_max_pages(self.max_pages)
    }
}

fn parse_var<T, F>(var: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            name,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn non_zero<T>(name: &'static str, value: T) -> Result<T, ConfigError>
where
    T: PartialEq + Default,
{
    if value == T::default() {
        return Err(ConfigError::InvalidVar {
            name,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}
