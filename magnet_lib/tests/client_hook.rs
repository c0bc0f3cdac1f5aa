use std::sync::{Arc, Mutex};

use magnet_lib::{Config, Error, ListQuery, MagnetClient};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d";

/// Client whose hook records every error message it sees.
fn recording_client(server: &MockServer) -> (MagnetClient, Arc<Mutex<Vec<String>>>) {
    let base_url = format!("{}/", server.uri());
    let config = Config::from_values(Some(KEY), Some(&base_url)).unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let client = MagnetClient::from_config(&config)
        .unwrap()
        .with_error_hook(move |err| sink.lock().unwrap().push(err.to_string()));
    (client, seen)
}

#[tokio::test]
async fn success_does_not_call_hook() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/issues"))
        .and(header("x-api-key", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "issues": [{"id": "i1", "title": "Test"}],
            "pagination": {"total": 1}
        })))
        .mount(&server)
        .await;

    let (client, seen) = recording_client(&server);
    let resp = client.list_issues(&ListQuery::default()).await.unwrap();
    assert_eq!(resp.issues.len(), 1);
    assert_eq!(resp.issues[0].id, "i1");
    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn api_error_goes_through_hook() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid key"})))
        .mount(&server)
        .await;

    let (client, seen) = recording_client(&server);
    let err = client.get_issue("i1").await.unwrap_err();
    assert_eq!(err.status(), Some(401));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains("Unauthorized"));
    assert!(seen[0].contains("invalid key"));
}

#[tokio::test]
async fn decode_error_goes_through_hook() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[1, 2, 3]"))
        .mount(&server)
        .await;

    let (client, seen) = recording_client(&server);
    let query = magnet_lib::SearchQuery::new("anything");
    let err = client.search(&query).await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    assert!(seen.lock().unwrap()[0].starts_with("Response parse error"));
}

#[tokio::test]
async fn list_pages_cursor_defaults_limit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/pages"))
        .and(query_param("limit", "50"))
        .and(query_param("cursor", "next-page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pages": []})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, seen) = recording_client(&server);
    let query = ListQuery::default().with_cursor("next-page");
    client.list_pages(&query).await.unwrap();
    assert!(seen.lock().unwrap().is_empty());
}
