//! Slack Worker API Client
//!
//! Slack Web API client for background workers with:
//! - Channel, member, user, bot and permalink lookups
//! - Message posting and direct-message conversations
//! - Public file sharing under a user token
//! - Cursor pagination with a page guard
//! - Structured request logging with token redaction
//!
//! # Quick Start
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from environment
//!     let client = slack_worker_api::create_client_from_env()?;
//!
//!     // Post a message
//!     let response = client
//!         .post_message("C024BE91L", "Hello, Slack!", true, Vec::new())
//!         .await?;
//!
//!     println!("Message posted: {}", response.ts);
//!
//!     for channel in client.get_channels().await? {
//!         println!("{}", channel.display_name());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `rustls` - TLS through rustls (default)
//! - `native-tls` - TLS through the platform library

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Observability
pub mod observability;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use api::{ApiCaller, Params};
pub use auth::Credential;
pub use client::{SlackClient, SlackClientImpl};
pub use config::{RedactionPolicy, SlackConfig, SlackConfigBuilder};
pub use errors::{SlackError, SlackResult};
pub use observability::{RequestLogger, TracingRequestLogger};
pub use transport::{HttpTransport, ReqwestTransport, TransportRequest};

/// Default base URL for Slack API
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Default timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default upper bound on pages fetched by one paginated call
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Create a Slack client with the given configuration
pub fn create_client(config: SlackConfig) -> SlackResult<SlackClientImpl> {
    SlackClientImpl::new(config)
}

/// Create a Slack client from environment variables
///
/// Reads:
/// - `SLACK_BOT_TOKEN` - Bot token (xoxb-*)
/// - `SLACK_USER_TOKEN` - User token (xoxp-*)
/// - `SLACK_BASE_URL` - API base URL
/// - `SLACK_TIMEOUT` - Request timeout in seconds
/// - `SLACK_MAX_PAGES` - Page guard for paginated calls, `0` to disable
/// - `SLACK_LOG_TOKENS` - Log raw tokens instead of redacted ones
pub fn create_client_from_env() -> SlackResult<SlackClientImpl> {
    let config = SlackConfig::from_env()?;
    create_client(config)
}
