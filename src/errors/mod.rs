//! Error types for the Slack client.
//!
//! Every public operation resolves to a [`SlackResult`]. Transport failures,
//! application errors reported through `ok: false`, and local configuration
//! problems all land in one [`SlackError`] hierarchy.

use thiserror::Error;

/// Result type for Slack operations
pub type SlackResult<T> = Result<T, SlackError>;

/// Root error type for Slack integration
#[derive(Error, Debug)]
pub enum SlackError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    /// Request building error
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Response parsing error
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Pagination error
    #[error("Pagination error: {0}")]
    Pagination(#[from] PaginationError),

    /// Error reported by Slack in an `ok: false` body
    #[error("{code}")]
    Api {
        /// Slack error code
        code: String,
    },
}

impl SlackError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "SLACK_CONFIG",
            Self::Authentication(_) => "SLACK_AUTH",
            Self::Request(_) => "SLACK_REQUEST",
            Self::Network(_) => "SLACK_NETWORK",
            Self::Response(_) => "SLACK_RESPONSE",
            Self::Pagination(_) => "SLACK_PAGINATION",
            Self::Api { .. } => "SLACK_API",
        }
    }

    /// Get the HTTP status that produced this error, if any
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Network(NetworkError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Slack's machine-readable error code for application errors
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code } => Some(code),
            _ => None,
        }
    }

    /// Whether the failure happened below the Slack application layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Response(_))
    }

    /// Build an application error from an `ok: false` response body
    pub fn from_response_body(body: &serde_json::Value) -> Self {
        let code = body
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown_error");

        Self::Api {
            code: code.to_string(),
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Missing token
    #[error("Bot token is missing")]
    MissingToken,

    /// Invalid token format
    #[error("Invalid token format: {0}")]
    InvalidToken(String),

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },
}

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthenticationError {
    /// An operation needs the user token but none is configured
    #[error("User token is required for this operation")]
    MissingUserToken,

    /// Token cannot be used as a header value
    #[error("Token contains characters not allowed in a header")]
    InvalidHeaderValue,
}

/// Request building errors
#[derive(Error, Debug)]
pub enum RequestError {
    /// Parameters did not serialize to a JSON object
    #[error("Invalid parameters: {message}")]
    InvalidParameters {
        /// Error message
        message: String,
    },
}

/// Network errors
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Non-success HTTP status
    #[error("HTTP {status} from {url}")]
    Status {
        /// Status code
        status: u16,
        /// Requested URL, token redacted
        url: String,
    },

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        // The URL of a GET carries the token in its query string
        let err = err.without_url();
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_connect() {
            NetworkError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            NetworkError::Http(err.to_string())
        }
    }
}

/// Response parsing errors
#[derive(Error, Debug)]
pub enum ResponseError {
    /// JSON deserialization error
    #[error("Deserialization error: {message}")]
    DeserializationError {
        /// Error message
        message: String,
    },

    /// Unexpected response format
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Error message
        message: String,
    },
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::DeserializationError {
            message: err.to_string(),
        }
    }
}

/// Pagination errors
#[derive(Error, Debug)]
pub enum PaginationError {
    /// The server kept returning cursors past the configured page limit
    #[error("{endpoint} returned more than {limit} pages")]
    PageLimitExceeded {
        /// Endpoint being paginated
        endpoint: String,
        /// Configured limit
        limit: u32,
    },
}
