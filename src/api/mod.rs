//! Request execution shared by every service.
//!
//! [`ApiCaller`] owns the transport, the credentials and the request logger.
//! `call_api` is the only place a transport result is interpreted: transport
//! failures and `ok: false` bodies both become a [`SlackError`], each logged
//! once at `warn`; successful bodies pass through unchanged.

mod pagination;

use crate::auth::{AuthManager, Credential};
use crate::config::SlackConfig;
use crate::errors::{RequestError, ResponseError, SlackError, SlackResult};
use crate::observability::{record_error, record_success, RequestLogger, RequestTrace};
use crate::transport::{HttpTransport, TransportRequest};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::Instrument;

/// Named request parameters, sent as a query string on GET
pub type Params = Map<String, Value>;

/// Executes Slack Web API requests
#[derive(Clone)]
pub struct ApiCaller {
    config: Arc<SlackConfig>,
    auth: AuthManager,
    transport: Arc<dyn HttpTransport>,
    logger: Arc<dyn RequestLogger>,
}

impl ApiCaller {
    /// Create a new API caller
    pub fn new(
        config: Arc<SlackConfig>,
        transport: Arc<dyn HttpTransport>,
        logger: Arc<dyn RequestLogger>,
    ) -> Self {
        let auth = AuthManager::new(config.clone());
        Self {
            config,
            auth,
            transport,
            logger,
        }
    }

    /// Get the authentication manager
    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    /// Get the configuration
    pub fn config(&self) -> &SlackConfig {
        &self.config
    }

    /// Issue one request and normalize its outcome
    pub async fn call_api(&self, endpoint: &str, request: TransportRequest) -> SlackResult<Value> {
        let trace = RequestTrace::new(request.method.as_str(), endpoint);
        let span = trace.span();
        let url = request.loggable_url();

        let outcome = self
            .transport
            .send(request)
            .instrument(span.clone())
            .await;

        match outcome {
            Ok(body) if body.get("ok").and_then(Value::as_bool).unwrap_or(false) => {
                record_success(&span);
                Ok(body)
            }
            Ok(body) => {
                let error = SlackError::from_response_body(&body);
                record_error(&span, &error.to_string());
                self.logger.api_error(endpoint, &body);
                Err(error)
            }
            Err(error) => {
                record_error(&span, &error.to_string());
                self.logger.transport_error(&url, &error);
                Err(error)
            }
        }
    }

    /// GET an endpoint; the token is sent as the `token` query parameter
    pub async fn get(
        &self,
        endpoint: &str,
        params: &Params,
        credential: Credential,
    ) -> SlackResult<Value> {
        let token = self.auth.token(credential)?;

        let mut query = query_pairs(params);
        query.retain(|(k, _)| k != "token");
        query.push(("token".to_string(), token.expose().to_string()));

        let request =
            TransportRequest::get(self.config.build_url(endpoint), self.auth.get_headers(), query);
        self.call_api(endpoint, request).await
    }

    /// POST a JSON body with a bearer token
    pub async fn post(
        &self,
        endpoint: &str,
        body: Value,
        credential: Credential,
    ) -> SlackResult<Value> {
        let token = self.auth.token(credential)?;
        let headers = self.auth.post_headers(credential)?;

        self.logger.outgoing_post(endpoint, &body, token.expose());

        let request = TransportRequest::post(self.config.build_url(endpoint), headers, body);
        self.call_api(endpoint, request).await
    }
}

impl std::fmt::Debug for ApiCaller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCaller")
            .field("base_url", &self.config.base_url.as_str())
            .field("auth", &self.auth)
            .finish()
    }
}

/// Serialize a request struct into named parameters
pub fn to_params<T: Serialize>(request: &T) -> SlackResult<Params> {
    match serde_json::to_value(request) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(SlackError::Request(RequestError::InvalidParameters {
            message: format!("expected an object, got {}", other),
        })),
        Err(e) => Err(SlackError::Request(RequestError::InvalidParameters {
            message: e.to_string(),
        })),
    }
}

/// Serialize a request struct into a JSON body
pub fn to_body<T: Serialize>(request: &T) -> SlackResult<Value> {
    to_params(request).map(Value::Object)
}

/// Decode a response body into a typed response
pub fn decode<T: DeserializeOwned>(body: Value) -> SlackResult<T> {
    serde_json::from_value(body).map_err(|e| SlackError::Response(ResponseError::from(e)))
}

/// Flatten parameters into query pairs; nested values are JSON-encoded
fn query_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((key.clone(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Lookup {
        user: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    }

    #[test]
    fn test_to_params_object() {
        let params = to_params(&Lookup {
            user: "U123".into(),
            limit: Some(200),
        })
        .unwrap();
        assert_eq!(params["user"], "U123");
        assert_eq!(params["limit"], 200);
    }

    #[test]
    fn test_to_params_rejects_non_objects() {
        let result = to_params(&vec![1, 2, 3]);
        assert!(matches!(
            result,
            Err(SlackError::Request(RequestError::InvalidParameters { .. }))
        ));
    }

    #[test]
    fn test_query_pairs_flattening() {
        let params = match json!({
            "channel": "C1",
            "inclusive": true,
            "limit": 50,
            "missing": null,
            "types": ["public_channel", "private_channel"]
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let pairs = query_pairs(&params);
        assert!(pairs.contains(&("channel".into(), "C1".into())));
        assert!(pairs.contains(&("inclusive".into(), "true".into())));
        assert!(pairs.contains(&("limit".into(), "50".into())));
        assert!(pairs.contains(&(
            "types".into(),
            r#"["public_channel","private_channel"]"#.into()
        )));
        assert!(!pairs.iter().any(|(k, _)| k == "missing"));
    }

    #[test]
    fn test_decode_mismatch_is_response_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Needs {
            #[allow(dead_code)]
            permalink: String,
        }

        let result: SlackResult<Needs> = decode(json!({"ok": true}));
        assert!(matches!(result, Err(SlackError::Response(_))));
    }
}
