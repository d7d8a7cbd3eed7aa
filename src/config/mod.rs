//! Configuration management for the Slack client.
//!
//! Supports configuration via:
//! - Explicit values
//! - Environment variables
//! - Builder pattern

use crate::errors::{ConfigurationError, SlackError, SlackResult};
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Token type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// Bot token (xoxb-*)
    Bot,
    /// User token (xoxp-*)
    User,
}

impl TokenType {
    /// Detect token type from prefix
    ///
    /// Rotating access tokens (`xoxe.xoxb-*`, `xoxe.xoxp-*`) are typed by the
    /// prefix after `xoxe.`. Refresh tokens (`xoxe-*`) and app-level tokens
    /// (`xapp-*`) cannot call the Web API and are rejected.
    pub fn from_token(token: &str) -> Result<Self, ConfigurationError> {
        let access = token.strip_prefix("xoxe.").unwrap_or(token);
        if access.starts_with("xoxb-") {
            Ok(TokenType::Bot)
        } else if access.starts_with("xoxp-") {
            Ok(TokenType::User)
        } else {
            Err(ConfigurationError::InvalidToken(
                "Token must start with xoxb- or xoxp-, optionally rotated as xoxe.".to_string(),
            ))
        }
    }
}

/// Secure wrapper for Slack tokens
#[derive(Clone)]
pub struct SlackToken {
    token: SecretString,
    token_type: TokenType,
}

impl SlackToken {
    /// Create a new token
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigurationError> {
        let token_str = token.into();
        let token_type = TokenType::from_token(&token_str)?;
        Ok(Self {
            token: SecretString::new(token_str),
            token_type,
        })
    }

    /// Get the token type
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Expose the token for use in requests
    pub(crate) fn expose(&self) -> &str {
        self.token.expose_secret()
    }
}

impl std::fmt::Debug for SlackToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SlackToken({:?}, [REDACTED])", self.token_type)
    }
}

/// How token values appear in request logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedactionPolicy {
    /// Keep the token prefix and hide the rest
    #[default]
    Redact,
    /// Log tokens verbatim
    Plain,
}

/// Configuration for the Slack client
#[derive(Clone)]
pub struct SlackConfig {
    /// Bot/workspace token used by default (xoxb-*)
    pub(crate) bot_token: Option<SlackToken>,
    /// User token for user-restricted operations (xoxp-*)
    pub(crate) user_token: Option<SlackToken>,
    /// Base URL for API requests
    pub base_url: Url,
    /// Request timeout
    pub timeout: Duration,
    /// Upper bound on pages fetched by one paginated call
    pub max_pages: Option<u32>,
    /// Token redaction in request logs
    pub redaction: RedactionPolicy,
    /// Default headers
    pub default_headers: HeaderMap,
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|t| t.token_type))
            .field("user_token", &self.user_token.as_ref().map(|t| t.token_type))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_pages", &self.max_pages)
            .field("redaction", &self.redaction)
            .finish()
    }
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            user_token: None,
            base_url: default_base_url(),
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
            max_pages: Some(crate::DEFAULT_MAX_PAGES),
            redaction: RedactionPolicy::default(),
            default_headers: HeaderMap::new(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(crate::DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}

impl SlackConfig {
    /// Create a configuration from a bot token and an optional user token
    ///
    /// Both tokens must be Web API access tokens: `xoxb-*` or `xoxp-*`, or
    /// their rotating `xoxe.` forms. Anything else fails with
    /// [`ConfigurationError::InvalidToken`].
    pub fn new(bot_token: &str, user_token: Option<&str>) -> SlackResult<Self> {
        let mut builder = SlackConfigBuilder::new().bot_token(bot_token)?;
        if let Some(token) = user_token {
            builder = builder.user_token(token)?;
        }
        builder.build()
    }

    /// Create a new configuration builder
    pub fn builder() -> SlackConfigBuilder {
        SlackConfigBuilder::new()
    }

    /// Create configuration from environment variables
    pub fn from_env() -> SlackResult<Self> {
        let mut builder = SlackConfigBuilder::new();

        if let Ok(token) = std::env::var("SLACK_BOT_TOKEN") {
            builder = builder.bot_token(&token)?;
        }

        if let Ok(token) = std::env::var("SLACK_USER_TOKEN") {
            builder = builder.user_token(&token)?;
        }

        if let Ok(url) = std::env::var("SLACK_BASE_URL") {
            builder = builder.base_url(&url)?;
        }

        if let Ok(timeout) = std::env::var("SLACK_TIMEOUT") {
            if let Ok(secs) = timeout.parse::<u64>() {
                builder = builder.timeout(Duration::from_secs(secs));
            }
        }

        // 0 disables the guard
        if let Ok(pages) = std::env::var("SLACK_MAX_PAGES") {
            if let Ok(n) = pages.parse::<u32>() {
                builder = builder.max_pages((n > 0).then_some(n));
            }
        }

        if let Ok(flag) = std::env::var("SLACK_LOG_TOKENS") {
            if matches!(flag.as_str(), "1" | "true" | "yes") {
                builder = builder.redaction(RedactionPolicy::Plain);
            }
        }

        builder.build()
    }

    /// Get the bot token if available
    pub fn bot_token(&self) -> Option<&SlackToken> {
        self.bot_token.as_ref()
    }

    /// Get the user token if available
    pub fn user_token(&self) -> Option<&SlackToken> {
        self.user_token.as_ref()
    }

    /// Build the full URL for an endpoint
    pub fn build_url(&self, endpoint: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = endpoint.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> SlackResult<()> {
        if self.bot_token.is_none() {
            return Err(SlackError::Configuration(ConfigurationError::MissingToken));
        }

        if self.max_pages == Some(0) {
            return Err(SlackError::Configuration(
                ConfigurationError::InvalidConfiguration {
                    message: "max_pages must be at least 1".to_string(),
                },
            ));
        }

        Ok(())
    }
}

/// Builder for SlackConfig
#[derive(Default)]
pub struct SlackConfigBuilder {
    config: SlackConfig,
}

impl SlackConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: SlackConfig::default(),
        }
    }

    /// Set the bot token
    pub fn bot_token(mut self, token: &str) -> Result<Self, ConfigurationError> {
        self.config.bot_token = Some(SlackToken::new(token)?);
        Ok(self)
    }

    /// Set the user token
    pub fn user_token(mut self, token: &str) -> Result<Self, ConfigurationError> {
        self.config.user_token = Some(SlackToken::new(token)?);
        Ok(self)
    }

    /// Set the base URL
    pub fn base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.base_url =
            Url::parse(url).map_err(|e| ConfigurationError::InvalidConfiguration {
                message: format!("Invalid URL: {}", e),
            })?;
        Ok(self)
    }

    /// Set the timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the page limit for paginated calls; `None` removes the limit
    pub fn max_pages(mut self, limit: Option<u32>) -> Self {
        self.config.max_pages = limit;
        self
    }

    /// Set the token redaction policy for request logs
    pub fn redaction(mut self, policy: RedactionPolicy) -> Self {
        self.config.redaction = policy;
        self
    }

    /// Add a default header
    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        if let Ok(header_name) = name.parse::<http::header::HeaderName>() {
            if let Ok(header_value) = value.parse::<http::header::HeaderValue>() {
                self.config.default_headers.insert(header_name, header_value);
            }
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> SlackResult<SlackConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the configuration without validation (for testing)
    pub fn build_unchecked(self) -> SlackConfig {
        self.config
    }
}
