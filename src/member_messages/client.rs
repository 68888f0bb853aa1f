use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::member_messages::{
    error::{Error, Result},
    page::PageRequest,
    DEFAULT_ENDPOINT, DEFAULT_MAX_PAGES,
};
use crate::models::{MemberMessage, MessagesPage};

/// Configuration for the member messages client
#[derive(Debug, Clone)]
pub struct MemberMessagesConfig {
    /// Full URL of the paginated messages endpoint
    pub endpoint: String,

    /// Timeout applied to each page request
    pub request_timeout: Duration,

    /// Stop aggregating after this many non-empty pages
    pub max_pages: usize,
}

impl Default for MemberMessagesConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(30),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl MemberMessagesConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the per-request timeout (builder pattern)
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the page guard (builder pattern)
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }
}

/// Client for the paginated member messages API
#[derive(Clone)]
pub struct MemberMessagesClient {
    http_client: Client,
    config: MemberMessagesConfig,
}

impl MemberMessagesClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: MemberMessagesConfig) -> Result<Self> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                Error::ConfigurationError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Fetch a single page
    ///
    /// A page whose `items` field is absent or null yields an empty list.
    pub async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<MemberMessage>> {
        let response = self
            .http_client
            .get(&self.config.endpoint)
            .query(&request.query())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::StatusError {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let page: MessagesPage = serde_json::from_slice(&body)?;

        Ok(page.items.unwrap_or_default())
    }

    /// Fetch every available message, starting from offset zero
    ///
    /// Pages are requested until the API returns an empty page. Any failure
    /// (transport, non-success status, malformed body) ends the walk and the
    /// messages gathered so far are returned, so the result may be partial
    /// but is never an error. At most `max_pages` non-empty pages are read.
    pub async fn fetch_all(&self, page_size: u32) -> Vec<MemberMessage> {
        let mut request = PageRequest::new(page_size);
        let mut messages = Vec::new();
        let mut pages = 0;

        while pages < self.config.max_pages {
            let page = match self.fetch_page(&request).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(
                        skip = request.skip,
                        limit = request.limit,
                        collected = messages.len(),
                        "stopping message fetch: {}",
                        e
                    );
                    return messages;
                }
            };

            if page.is_empty() {
                debug!(pages, collected = messages.len(), "reached end of member messages");
                return messages;
            }

            debug!(skip = request.skip, count = page.len(), "fetched member messages page");
            messages.extend(page);
            pages += 1;
            request = request.next();
        }

        warn!(
            max_pages = self.config.max_pages,
            collected = messages.len(),
            "page limit reached while fetching member messages"
        );
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MemberMessagesConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_pages, DEFAULT_MAX_PAGES);
    }

    #[test]
    fn test_config_builder() {
        let config = MemberMessagesConfig::new("http://localhost:9999/messages")
            .with_request_timeout(Duration::from_secs(2))
            .with_max_pages(3);

        assert_eq!(config.endpoint, "http://localhost:9999/messages");
        assert_eq!(config.request_timeout, Duration::from_secs(2));
        assert_eq!(config.max_pages, 3);
    }

    #[tokio::test]
    async fn test_fetch_all_unreachable_source_is_empty() {
        // Nothing listens on port 9 locally; the first request fails
        let config = MemberMessagesConfig::new("http://127.0.0.1:9/messages")
            .with_request_timeout(Duration::from_secs(2));
        let client = MemberMessagesClient::new(config).unwrap();

        let messages = client.fetch_all(100).await;
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_page_unreachable_source_is_transport_error() {
        let config = MemberMessagesConfig::new("http://127.0.0.1:9/messages")
            .with_request_timeout(Duration::from_secs(2));
        let client = MemberMessagesClient::new(config).unwrap();

        let result = client.fetch_page(&PageRequest::new(10)).await;
        assert!(matches!(result, Err(Error::TransportError(_))));
    }
}
