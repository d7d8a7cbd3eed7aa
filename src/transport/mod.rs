//! HTTP transport layer for the Slack client.
//!
//! One request in, one decoded JSON document out. Anything that goes wrong
//! below the Slack application layer (connection, timeout, non-2xx status,
//! undecodable body) is reported here as a transport error. Interpreting the
//! `ok` field is left to the caller.

use crate::errors::{NetworkError, ResponseError, SlackError, SlackResult};
use crate::observability::redact_url;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use reqwest::{Client, ClientBuilder, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// HTTP transport trait for making API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and decode the JSON response body
    async fn send(&self, request: TransportRequest) -> SlackResult<Value>;
}

/// A single API request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Full URL without query string
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Query string parameters
    pub query: Vec<(String, String)>,
    /// JSON request body
    pub body: Option<Value>,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl TransportRequest {
    /// Create a new GET request
    pub fn get(url: impl Into<String>, headers: HeaderMap, query: Vec<(String, String)>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers,
            query,
            body: None,
            timeout: None,
        }
    }

    /// Create a new POST request with a JSON body
    pub fn post(url: impl Into<String>, headers: HeaderMap, body: Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            query: Vec::new(),
            body: Some(body),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Look up a query parameter
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// URL including the query string, with credentials redacted
    pub fn loggable_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }

        match url::Url::parse_with_params(&self.url, &self.query) {
            Ok(full) => redact_url(full.as_str()),
            Err(_) => self.url.clone(),
        }
    }
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> SlackResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }

    async fn parse_response(&self, response: Response, url: String) -> SlackResult<Value> {
        let status = response.status();
        if !status.is_success() {
            return Err(SlackError::Network(NetworkError::Status {
                status: status.as_u16(),
                url,
            }));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))?;

        debug!(response_bytes = body.len(), "Received response");

        serde_json::from_str(&body).map_err(|e| SlackError::Response(ResponseError::from(e)))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: TransportRequest) -> SlackResult<Value> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);
        let loggable_url = request.loggable_url();

        let mut req_builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .timeout(timeout);

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|e| SlackError::Network(NetworkError::from(e)))?;

        self.parse_response(response, loggable_url).await
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_request_builder() {
        let request = TransportRequest::get(
            "https://slack.com/api/users.info",
            HeaderMap::new(),
            vec![("user".into(), "U123".into())],
        );

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "https://slack.com/api/users.info");
        assert_eq!(request.query_param("user"), Some("U123"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_post_request_builder() {
        let request = TransportRequest::post(
            "https://slack.com/api/chat.postMessage",
            HeaderMap::new(),
            json!({"channel": "C123", "text": "hi"}),
        )
        .with_timeout(Duration::from_secs(5));

        assert_eq!(request.method, Method::POST);
        assert!(request.query.is_empty());
        assert_eq!(request.body.as_ref().unwrap()["channel"], "C123");
        assert_eq!(request.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_loggable_url_hides_token() {
        let request = TransportRequest::get(
            "https://slack.com/api/users.list",
            HeaderMap::new(),
            vec![
                ("cursor".into(), "dXNlcjpVMDY=".into()),
                ("token".into(), "xoxb-secret".into()),
            ],
        );

        let url = request.loggable_url();
        assert!(url.starts_with("https://slack.com/api/users.list?cursor="));
        assert!(url.contains("token=[REDACTED]"));
        assert!(!url.contains("xoxb-secret"));
    }

    #[test]
    fn test_loggable_url_without_query() {
        let request = TransportRequest::post(
            "https://slack.com/api/conversations.open",
            HeaderMap::new(),
            json!({}),
        );
        assert_eq!(request.loggable_url(), "https://slack.com/api/conversations.open");
    }
}
