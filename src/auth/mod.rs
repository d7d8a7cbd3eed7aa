//! Credential selection for Slack API requests.
//!
//! Every request names the credential it runs under. The bot/workspace token
//! is the default; a few endpoints are restricted to user-authorized tokens.

use crate::config::{SlackConfig, SlackToken};
use crate::errors::{AuthenticationError, SlackError, SlackResult};
use http::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::sync::Arc;

/// Content type sent with JSON request bodies
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Which configured token a request runs under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Credential {
    /// Bot/workspace token
    #[default]
    Default,
    /// User token, for capabilities Slack only grants to user-authorized requests
    User,
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::Default => write!(f, "default"),
            Credential::User => write!(f, "user"),
        }
    }
}

/// Authentication manager for Slack API requests
#[derive(Clone)]
pub struct AuthManager {
    config: Arc<SlackConfig>,
}

impl AuthManager {
    /// Create a new authentication manager
    pub fn new(config: Arc<SlackConfig>) -> Self {
        Self { config }
    }

    /// Resolve the token for a credential
    pub fn token(&self, credential: Credential) -> SlackResult<&SlackToken> {
        match credential {
            Credential::Default => self
                .config
                .bot_token()
                .ok_or(SlackError::Configuration(
                    crate::errors::ConfigurationError::MissingToken,
                )),
            Credential::User => self
                .config
                .user_token()
                .ok_or(SlackError::Authentication(AuthenticationError::MissingUserToken)),
        }
    }

    /// Headers for a JSON POST made under the given credential
    pub fn post_headers(&self, credential: Credential) -> SlackResult<HeaderMap> {
        let token = self.token(credential)?;
        self.build_headers(token)
    }

    /// Headers for a GET; the token travels in the query string instead
    pub fn get_headers(&self) -> HeaderMap {
        self.config.default_headers.clone()
    }

    /// Check if a credential can be resolved
    pub fn has_credential(&self, credential: Credential) -> bool {
        self.token(credential).is_ok()
    }

    fn build_headers(&self, token: &SlackToken) -> SlackResult<HeaderMap> {
        let mut headers = self.config.default_headers.clone();

        let auth_value = format!("Bearer {}", token.expose());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).map_err(|_| {
                SlackError::Authentication(AuthenticationError::InvalidHeaderValue)
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        Ok(headers)
    }
}

impl std::fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthManager")
            .field("has_bot_token", &self.has_credential(Credential::Default))
            .field("has_user_token", &self.has_credential(Credential::User))
            .finish()
    }
}
