//! Integration tests for cursor pagination

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use slack_worker_api::fixtures;
use wiremock::matchers::{method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn test_get_channels_follows_cursors() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/conversations.list"))
        .and(query_param("cursor", "page-2"))
        .respond_with(success_response(fixtures::page(
            "channels",
            vec![fixtures::channel_json("C2", "random")],
            Some("page-3"),
        )))
        .with_priority(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/conversations.list"))
        .and(query_param("cursor", "page-3"))
        .respond_with(success_response(fixtures::page(
            "channels",
            vec![fixtures::channel_json("C3", "deploys")],
            None,
        )))
        .with_priority(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/conversations.list"))
        .and(query_param("token", BOT_TOKEN))
        .respond_with(success_response(fixtures::page(
            "channels",
            vec![fixtures::channel_json("C1", "general")],
            Some("page-2"),
        )))
        .with_priority(10)
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let channels = client.get_channels().await.unwrap();

    let ids: Vec<_> = channels.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["C1", "C2", "C3"]);
}

#[tokio::test]
async fn test_get_members_stops_at_first_error() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/users.list"))
        .and(query_param("cursor", "next"))
        .respond_with(success_response(json!({"ok": false, "error": "ratelimited"})))
        .with_priority(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/users.list"))
        .respond_with(success_response(fixtures::page(
            "members",
            vec![fixtures::user_json("U1", "ada")],
            Some("next"),
        )))
        .with_priority(10)
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let error = client.get_members().await.unwrap_err();

    assert_eq!(error.api_code(), Some("ratelimited"));
}
