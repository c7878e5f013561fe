//! HTTP-level tests for `EventSpaceClient` against a wiremock server.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use event_space_client::{ClientError, EventSpaceClient};
use event_space_core::{EventId, EventPatchDraft};
use event_space_testing::fixtures;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn launch_party_json(id: EventId) -> serde_json::Value {
    json!({
        "_id": id.to_string(),
        "name": "Launch Party",
        "email": "e@x.com",
        "phoneNumber": "555-0100",
        "date": "2025-06-01T00:00:00Z",
        "time": "18:00",
        "hall": "Hall 3"
    })
}

#[tokio::test]
async fn create_posts_draft_and_parses_event() {
    let server = MockServer::start().await;
    let id = EventId::new();

    Mock::given(method("POST"))
        .and(path("/api/events"))
        .and(body_json(json!({
            "name": "Launch Party",
            "email": "e@x.com",
            "phoneNumber": "555-0100",
            "date": "2025-06-01",
            "time": "18:00",
            "hall": "Hall 3"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(launch_party_json(id)))
        .expect(1)
        .mount(&server)
        .await;

    let client = EventSpaceClient::new(server.uri());
    let event = client.create(&fixtures::launch_party_draft()).await.unwrap();

    assert_eq!(event.id, id);
    assert_eq!(event.hall, "Hall 3");
    assert_eq!(event.time.format("%H:%M").to_string(), "18:00");
}

#[tokio::test]
async fn validation_error_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "missing required fields: phoneNumber, date, time",
            "code": "VALIDATION_ERROR"
        })))
        .mount(&server)
        .await;

    let client = EventSpaceClient::new(server.uri());
    let err = client
        .create(&fixtures::draft("A", "Hall 1", "2025-06-01"))
        .await
        .unwrap_err();

    assert!(err.is_rejected());
    match err {
        ClientError::Api { code, message, .. } => {
            assert_eq!(code, "VALIDATION_ERROR");
            assert!(message.contains("phoneNumber"));
        }
        other => unreachable!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn list_parses_every_event() {
    let server = MockServer::start().await;
    let ids = [EventId::new(), EventId::new()];

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            launch_party_json(ids[0]),
            launch_party_json(ids[1])
        ])))
        .mount(&server)
        .await;

    let events = EventSpaceClient::new(server.uri()).list().await.unwrap();

    assert_eq!(events.iter().map(|e| e.id).collect::<Vec<_>>(), ids);
}

#[tokio::test]
async fn get_missing_event_is_not_found() {
    let server = MockServer::start().await;
    let id = EventId::new();

    Mock::given(method("GET"))
        .and(path(format!("/api/events/{id}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": format!("Event with id {id} not found"),
            "code": "NOT_FOUND"
        })))
        .mount(&server)
        .await;

    let err = EventSpaceClient::new(server.uri()).get(id).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn update_sends_only_set_fields() {
    let server = MockServer::start().await;
    let id = EventId::new();
    let mut updated = launch_party_json(id);
    updated["hall"] = json!("Hall 2");

    Mock::given(method("PUT"))
        .and(path(format!("/api/events/{id}")))
        .and(body_json(json!({ "hall": "Hall 2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&server)
        .await;

    let patch = EventPatchDraft {
        hall: Some("Hall 2".to_string()),
        ..EventPatchDraft::default()
    };
    let event = EventSpaceClient::new(server.uri())
        .update(id, &patch)
        .await
        .unwrap();

    assert_eq!(event.hall, "Hall 2");
}

#[tokio::test]
async fn delete_accepts_message_body() {
    let server = MockServer::start().await;
    let id = EventId::new();

    Mock::given(method("DELETE"))
        .and(path(format!("/api/events/{id}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Event deleted successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    EventSpaceClient::new(server.uri()).delete(id).await.unwrap();
}

#[tokio::test]
async fn server_error_with_plain_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = EventSpaceClient::new(server.uri()).list().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("upstream down"));
}

#[tokio::test]
async fn unexpected_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = EventSpaceClient::new(server.uri()).list().await.unwrap_err();

    assert!(matches!(err, ClientError::ResponseParseFailed(_)));
}

#[tokio::test]
async fn unreachable_server_is_request_failure() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let err = EventSpaceClient::new(uri).list().await.unwrap_err();

    assert!(matches!(err, ClientError::RequestFailed(_)));
}
