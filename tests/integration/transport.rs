//! Integration tests for the reqwest transport

use super::*;
use serde_json::json;
use slack_worker_api::errors::NetworkError;
use slack_worker_api::mocks::{LogLevel, RecordingLogger};
use slack_worker_api::{ReqwestTransport, SlackError};
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::Mock;

fn prebuilt_transport() -> Arc<ReqwestTransport> {
    let client = reqwest::Client::builder()
        .user_agent("slack-worker-api-tests")
        .build()
        .expect("Failed to build reqwest client");
    Arc::new(ReqwestTransport::with_client(client, Duration::from_secs(5)))
}

#[tokio::test]
async fn test_connection_failure_does_not_leak_token() {
    // Nothing listens on port 1
    let config = SlackConfig::builder()
        .bot_token(BOT_TOKEN)
        .unwrap()
        .base_url("http://127.0.0.1:1/api")
        .unwrap()
        .build()
        .unwrap();
    let logger = Arc::new(RecordingLogger::new());
    let client =
        SlackClientImpl::with_transport_and_logger(config, prebuilt_transport(), logger.clone())
            .unwrap();

    let error = client.user_info("U1").await.unwrap_err();

    assert!(matches!(
        error,
        SlackError::Network(NetworkError::ConnectionFailed { .. })
    ));
    assert!(!error.to_string().contains(BOT_TOKEN));
    assert!(!format!("{:?}", error).contains(BOT_TOKEN));

    let warnings = logger.at(LogLevel::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].target.contains("token=[REDACTED]"));
    assert!(!warnings[0].target.contains(BOT_TOKEN));
    assert!(!warnings[0].detail.contains(BOT_TOKEN));
}

#[tokio::test]
async fn test_prebuilt_client_is_used() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/bots.info"))
        .and(query_param("bot", "B1"))
        .and(header("user-agent", "slack-worker-api-tests"))
        .respond_with(success_response(json!({"ok": true, "bot": {"id": "B1"}})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = SlackConfig::builder()
        .bot_token(BOT_TOKEN)
        .unwrap()
        .base_url(&format!("{}/api", mock_server.uri()))
        .unwrap()
        .build()
        .unwrap();
    let client = SlackClientImpl::with_transport(config, prebuilt_transport()).unwrap();

    let response = client.get_bot_info("B1").await.unwrap();
    assert_eq!(response.bot.id.as_str(), "B1");
}
