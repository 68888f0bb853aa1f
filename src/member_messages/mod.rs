//! Client for the member messages API
//!
//! The upstream API serves member messages in pages addressed by an offset
//! (`skip`) and a page size (`limit`). [`MemberMessagesClient::fetch_all`]
//! walks those pages from offset zero and aggregates every message into one
//! ordered sequence.
//!
//! # Quick Start
//!
//! ```no_run
//! use member_qa::member_messages::{MemberMessagesClient, MemberMessagesConfig, DEFAULT_PAGE_SIZE};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MemberMessagesClient::new(MemberMessagesConfig::default())?;
//!     let messages = client.fetch_all(DEFAULT_PAGE_SIZE).await;
//!     println!("fetched {} messages", messages.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod page;

pub use client::{MemberMessagesClient, MemberMessagesConfig};
pub use error::{Error, Result};
pub use page::PageRequest;

/// Default member messages endpoint
pub const DEFAULT_ENDPOINT: &str = "https://november7-730026606190.europe-west1.run.app/messages/";

/// Page size for general use
pub const DEFAULT_PAGE_SIZE: u32 = 500;

/// Page size used by the interactive ask paths
pub const INTERACTIVE_PAGE_SIZE: u32 = 100;

/// Upper bound on non-empty pages fetched per aggregation
pub const DEFAULT_MAX_PAGES: usize = 1000;
