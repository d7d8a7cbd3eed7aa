//! Integration tests for single-request operations

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use slack_worker_api::errors::{AuthenticationError, NetworkError, ResponseError};
use slack_worker_api::fixtures;
use slack_worker_api::SlackError;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_user_info_sends_token_as_query_param() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/users.info"))
        .and(query_param("user", "U1"))
        .and(query_param("token", BOT_TOKEN))
        .respond_with(success_response(
            json!({"ok": true, "user": fixtures::user_json("U1", "ada")}),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let response = client.user_info("U1").await.unwrap();

    assert_eq!(response.user.best_name(), "ada");

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_post_message_sends_bearer_and_json_body() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/chat.postMessage"))
        .and(header("authorization", format!("Bearer {}", BOT_TOKEN).as_str()))
        .and(header("content-type", "application/json;charset=utf-8"))
        .and(body_json(json!({
            "channel": "C1",
            "text": "deploy finished",
            "attachments": [],
            "mrkdwn": false,
            "as_user": false
        })))
        .respond_with(success_response(fixtures::post_message_response(
            "C1",
            "1503435956.000247",
            "deploy finished",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let response = client
        .post_message("C1", "deploy finished", false, Vec::new())
        .await
        .unwrap();

    assert_eq!(response.ts.as_str(), "1503435956.000247");
}

#[tokio::test]
async fn test_file_public_url_sends_user_token() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/files.sharedPublicURL"))
        .and(header("authorization", format!("Bearer {}", USER_TOKEN).as_str()))
        .and(body_json(json!({"file": "F1"})))
        .respond_with(success_response(json!({"ok": true, "file": fixtures::file_json("F1")})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Some(USER_TOKEN));
    let response = client.file_public_url("F1").await.unwrap();

    assert!(response.file.permalink_public.is_some());
}

#[tokio::test]
async fn test_file_public_url_without_user_token_never_reaches_server() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(success_response(json!({"ok": true})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let error = client.file_public_url("F1").await.unwrap_err();

    assert!(matches!(
        error,
        SlackError::Authentication(AuthenticationError::MissingUserToken)
    ));
}

#[tokio::test]
async fn test_application_error_code() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/bots.info"))
        .respond_with(success_response(fixtures::error_response("bot_not_found")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let error = client.get_bot_info("B404").await.unwrap_err();

    assert_eq!(error.api_code(), Some("bot_not_found"));
    assert!(!error.is_transport());
}

#[tokio::test]
async fn test_http_status_is_transport_error() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/chat.getPermalink"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream failure"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let error = client.get_permalink("C1", "1.2").await.unwrap_err();

    match error {
        SlackError::Network(NetworkError::Status { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.contains("token=[REDACTED]"));
            assert!(!url.contains(BOT_TOKEN));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_body_is_response_error() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/conversations.open"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let error = client.open_direct_message("U1").await.unwrap_err();

    assert!(matches!(
        error,
        SlackError::Response(ResponseError::DeserializationError { .. })
    ));
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/users.info"))
        .respond_with(
            success_response(json!({"ok": true})).set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = SlackConfig::builder()
        .bot_token(BOT_TOKEN)
        .unwrap()
        .base_url(&format!("{}/api", mock_server.uri()))
        .unwrap()
        .timeout(std::time::Duration::from_millis(200))
        .build()
        .unwrap();
    let client = SlackClientImpl::new(config).unwrap();

    let error = client.user_info("U1").await.unwrap_err();
    assert!(error.is_transport());
}
