//! Request logging with sensitive data redaction.
//!
//! The client never calls `tracing` directly for request diagnostics; it goes
//! through a [`RequestLogger`], so the redaction policy can be swapped without
//! touching call sites.

use crate::config::RedactionPolicy;
use crate::errors::SlackError;
use serde_json::Value;
use tracing::{info, warn};

/// Redact token from a string, preserving prefix for debugging
pub fn redact_token(token: &str) -> String {
    match token.get(..8) {
        Some(prefix) if token.len() > 8 => format!("{}...[REDACTED]", prefix),
        _ => "[REDACTED]".to_string(),
    }
}

/// Redact a URL, hiding any tokens in query parameters
pub fn redact_url(url: &str) -> String {
    if let Some(query_start) = url.find('?') {
        let (base, query) = url.split_at(query_start);
        let redacted_query = redact_query_params(query);
        format!("{}{}", base, redacted_query)
    } else {
        url.to_string()
    }
}

fn redact_query_params(query: &str) -> String {
    let sensitive_params = ["token", "key", "secret", "password", "api_key"];

    let mut result = String::from("?");
    let params = query.trim_start_matches('?');

    for (i, pair) in params.split('&').enumerate() {
        if i > 0 {
            result.push('&');
        }

        if let Some(eq_pos) = pair.find('=') {
            let (key, _value) = pair.split_at(eq_pos);
            if sensitive_params.iter().any(|&s| key.eq_ignore_ascii_case(s)) {
                result.push_str(key);
                result.push_str("=[REDACTED]");
            } else {
                result.push_str(pair);
            }
        } else {
            result.push_str(pair);
        }
    }

    result
}

/// Diagnostic side channel of the API caller
pub trait RequestLogger: Send + Sync {
    /// Called before every POST is dispatched
    fn outgoing_post(&self, endpoint: &str, body: &Value, token: &str);

    /// Called when Slack answers with `ok: false`
    fn api_error(&self, endpoint: &str, body: &Value);

    /// Called when the transport fails
    fn transport_error(&self, url: &str, error: &SlackError);
}

/// [`RequestLogger`] backed by `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRequestLogger {
    redaction: RedactionPolicy,
}

impl TracingRequestLogger {
    /// Create a logger with the given redaction policy
    pub fn new(redaction: RedactionPolicy) -> Self {
        Self { redaction }
    }

    /// Render a token according to the redaction policy
    pub fn display_token(&self, token: &str) -> String {
        match self.redaction {
            RedactionPolicy::Redact => redact_token(token),
            RedactionPolicy::Plain => token.to_string(),
        }
    }
}

impl RequestLogger for TracingRequestLogger {
    fn outgoing_post(&self, endpoint: &str, body: &Value, token: &str) {
        info!(
            path = %endpoint,
            body = %body,
            token = %self.display_token(token),
            "About to make POST request"
        );
    }

    fn api_error(&self, endpoint: &str, body: &Value) {
        warn!(path = %endpoint, response = %body, "Got Slack error");
    }

    fn transport_error(&self, url: &str, error: &SlackError) {
        warn!(url = %url, error = %error, "Got error calling Slack API");
    }
}
