//! Tracing spans for API requests.

use std::time::{Duration, Instant};
use tracing::{span, Level, Span};

/// Create a request span with common attributes
pub fn create_request_span(method: &str, endpoint: &str, request_id: &str) -> Span {
    span!(
        Level::INFO,
        "slack_request",
        method = %method,
        endpoint = %endpoint,
        otel.kind = "client",
        otel.status_code = tracing::field::Empty,
        slack.request_id = %request_id,
        slack.page = tracing::field::Empty,
        error.message = tracing::field::Empty,
    )
}

/// Record success on a span
pub fn record_success(span: &Span) {
    span.record("otel.status_code", "OK");
}

/// Record error on a span
pub fn record_error(span: &Span, error: &str) {
    span.record("otel.status_code", "ERROR");
    span.record("error.message", error);
}

/// Record which page of a paginated listing is in flight
pub fn record_page(span: &Span, page: u32) {
    span.record("slack.page", page);
}

/// Request-scoped trace info
#[derive(Debug, Clone)]
pub struct RequestTrace {
    /// Start time
    pub start_time: Instant,
    /// Request ID
    pub request_id: String,
    /// HTTP method
    pub method: String,
    /// Endpoint
    pub endpoint: String,
}

impl RequestTrace {
    /// Create a new request trace
    pub fn new(method: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            start_time: Instant::now(),
            request_id: uuid::Uuid::new_v4().to_string(),
            method: method.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Open a span for this request
    pub fn span(&self) -> Span {
        create_request_span(&self.method, &self.endpoint, &self.request_id)
    }

    /// Get elapsed time
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Get elapsed milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }
}
