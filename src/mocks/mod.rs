//! Mock implementations for testing.
//!
//! Provides a scripted transport and a recording request logger for
//! London-School TDD.

use crate::errors::{ResponseError, SlackError, SlackResult};
use crate::observability::RequestLogger;
use crate::transport::{HttpTransport, TransportRequest};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Arc;

/// Mock response configuration
#[derive(Debug)]
pub struct MockResponse {
    /// Decoded response body
    pub body: Value,
    /// Delay before response
    pub delay_ms: Option<u64>,
    /// Error to return instead
    pub error: Option<SlackError>,
}

impl MockResponse {
    /// Create a successful JSON response
    pub fn json<T: Serialize>(data: &T) -> Self {
        Self {
            body: serde_json::to_value(data).unwrap_or(Value::Null),
            delay_ms: None,
            error: None,
        }
    }

    /// Create an `ok: true` response with no payload
    pub fn ok() -> Self {
        Self::json(&json!({ "ok": true }))
    }

    /// Create a transport error
    pub fn error(error: SlackError) -> Self {
        Self {
            body: Value::Null,
            delay_ms: None,
            error: Some(error),
        }
    }

    /// Create a Slack API error response
    pub fn slack_error(error_code: &str) -> Self {
        Self::json(&json!({ "ok": false, "error": error_code }))
    }

    /// Add delay to response
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = Some(ms);
        self
    }
}

/// Recorded request for verification
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL without query string
    pub url: String,
    /// Request method
    pub method: String,
    /// Query string parameters
    pub query: Vec<(String, String)>,
    /// JSON request body
    pub body: Option<Value>,
    /// Request headers
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Look up a query parameter
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a header, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    /// Queue of responses to return
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Recorded requests
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response to the queue
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Add multiple responses
    pub fn add_responses(self, responses: impl IntoIterator<Item = MockResponse>) -> Self {
        self.responses.lock().extend(responses);
        self
    }

    /// Add a JSON response
    pub fn add_json_response<T: Serialize>(self, data: &T) -> Self {
        self.add_response(MockResponse::json(data))
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Get the last recorded request
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }

    /// Number of requests sent so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Get remaining response count
    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().len()
    }

    fn record_request(&self, request: &TransportRequest) {
        let headers = request
            .headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();

        self.requests.lock().push(RecordedRequest {
            url: request.url.clone(),
            method: request.method.to_string(),
            query: request.query.clone(),
            body: request.body.clone(),
            headers,
        });
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: TransportRequest) -> SlackResult<Value> {
        self.record_request(&request);

        let response = self.responses.lock().pop_front().ok_or_else(|| {
            SlackError::Response(ResponseError::UnexpectedResponse {
                message: "No mock response configured".to_string(),
            })
        })?;

        if let Some(delay) = response.delay_ms {
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
        }

        match response.error {
            Some(error) => Err(error),
            None => Ok(response.body),
        }
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport")
            .field("pending_responses", &self.responses.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}

/// Log level of a recorded entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational
    Info,
    /// Warning
    Warn,
}

/// One call made to a [`RecordingLogger`]
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Level the default logger would emit at
    pub level: LogLevel,
    /// Endpoint name, or the attempted URL for transport errors
    pub target: String,
    /// Request body, response body, or error text
    pub detail: String,
    /// Token as passed to the logger
    pub token: Option<String>,
}

/// Request logger that records every call
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    /// Create a new recording logger
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded entries
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Recorded entries at `level`
    pub fn at(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.level == level)
            .cloned()
            .collect()
    }

    fn push(&self, level: LogLevel, target: &str, detail: String, token: Option<&str>) {
        self.entries.lock().push(LogEntry {
            level,
            target: target.to_string(),
            detail,
            token: token.map(str::to_string),
        });
    }
}

impl RequestLogger for RecordingLogger {
    fn outgoing_post(&self, endpoint: &str, body: &Value, token: &str) {
        self.push(LogLevel::Info, endpoint, body.to_string(), Some(token));
    }

    fn api_error(&self, endpoint: &str, body: &Value) {
        self.push(LogLevel::Warn, endpoint, body.to_string(), None);
    }

    fn transport_error(&self, url: &str, error: &SlackError) {
        self.push(LogLevel::Warn, url, error.to_string(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::NetworkError;

    #[tokio::test]
    async fn test_mock_transport_json() {
        let transport = MockHttpTransport::new().add_json_response(&json!({"ok": true, "value": "test"}));

        let request = TransportRequest::get("https://slack.com/api/test", http::HeaderMap::new(), vec![]);

        let response = transport.send(request).await.unwrap();
        assert_eq!(response["value"], "test");
        assert_eq!(transport.remaining_responses(), 0);
    }

    #[tokio::test]
    async fn test_mock_transport_records_requests() {
        let transport = MockHttpTransport::new().add_response(MockResponse::ok());

        let request = TransportRequest::get(
            "https://slack.com/api/test",
            http::HeaderMap::new(),
            vec![("user".to_string(), "U1".to_string())],
        );

        transport.send(request).await.unwrap();

        let requests = transport.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://slack.com/api/test");
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].query_param("user"), Some("U1"));
    }

    #[tokio::test]
    async fn test_mock_transport_error() {
        let transport =
            MockHttpTransport::new().add_response(MockResponse::error(SlackError::Network(NetworkError::Timeout)));

        let request = TransportRequest::get("https://slack.com/api/test", http::HeaderMap::new(), vec![]);

        let result = transport.send(request).await;
        assert!(matches!(result, Err(SlackError::Network(NetworkError::Timeout))));
    }

    #[tokio::test]
    async fn test_mock_transport_empty_queue() {
        let transport = MockHttpTransport::new();
        let request = TransportRequest::get("https://slack.com/api/test", http::HeaderMap::new(), vec![]);

        assert!(transport.send(request).await.is_err());
    }

    #[test]
    fn test_recording_logger_levels() {
        let logger = RecordingLogger::new();
        logger.outgoing_post("chat.postMessage", &json!({"text": "hi"}), "xoxb-1");
        logger.api_error("users.info", &json!({"ok": false, "error": "user_not_found"}));

        assert_eq!(logger.entries().len(), 2);
        assert_eq!(logger.at(LogLevel::Info)[0].token.as_deref(), Some("xoxb-1"));
        assert_eq!(logger.at(LogLevel::Warn)[0].target, "users.info");
    }
}
