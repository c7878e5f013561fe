//! End-to-end HTTP scenarios against the in-memory store.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::http::StatusCode;
use axum_test::TestServer;
use event_space_core::{Event, EventId};
use event_space_testing::{InMemoryEventStore, fixtures};
use event_space_web::{AppState, build_router};
use serde_json::{Value, json};
use std::sync::Arc;

fn server_with(store: &InMemoryEventStore) -> TestServer {
    event_space_testing::init_test_tracing();
    let app = build_router(AppState::new(Arc::new(store.clone())));
    TestServer::new(app).expect("test server")
}

fn launch_party_body() -> Value {
    json!({
        "name": "Launch Party",
        "email": "e@x.com",
        "phoneNumber": "555-0100",
        "date": "2025-06-01",
        "time": "18:00",
        "hall": "Hall 3"
    })
}

async fn create(server: &TestServer, body: &Value) -> Event {
    let response = server.post("/api/events").json(body).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Event>()
}

#[tokio::test]
async fn create_then_get_returns_same_fields() {
    let store = InMemoryEventStore::new();
    let server = server_with(&store);

    let response = server.post("/api/events").json(&launch_party_body()).await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    let id = created["_id"].as_str().expect("id is a string");
    assert!(!id.is_empty());

    let response = server.get(&format!("/api/events/{id}")).await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "_id": id,
        "name": "Launch Party",
        "email": "e@x.com",
        "phoneNumber": "555-0100",
        "date": "2025-06-01T00:00:00Z",
        "time": "18:00",
        "hall": "Hall 3"
    }));
}

#[tokio::test]
async fn create_with_missing_fields_is_rejected_and_not_stored() {
    let store = InMemoryEventStore::new();
    let server = server_with(&store);

    let response = server
        .post("/api/events")
        .json(&json!({ "name": "A", "email": "a@x.com", "hall": "Hall 1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "missing required fields: phoneNumber, date, time");

    let events: Vec<Event> = server.get("/api/events").await.json();
    assert!(events.iter().all(|event| event.name != "A"));
}

#[tokio::test]
async fn unparseable_date_is_rejected_and_not_stored() {
    let store = InMemoryEventStore::new();
    let server = server_with(&store);

    let mut body = launch_party_body();
    body["date"] = json!("next tuesday");
    let response = server.post("/api/events").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "VALIDATION_ERROR");
    assert!(store.is_empty());
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let server = server_with(&InMemoryEventStore::new());

    let response = server
        .post("/api/events")
        .content_type("application/json")
        .text("{\"name\": \"Launch")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn list_reflects_creates_and_deletes() {
    let store = InMemoryEventStore::new();
    let server = server_with(&store);

    let mut ids = Vec::new();
    for n in 0..5 {
        let mut body = launch_party_body();
        body["name"] = json!(format!("Party {n}"));
        ids.push(create(&server, &body).await.id);
    }
    for id in &ids[..2] {
        server.delete(&format!("/api/events/{id}")).await.assert_status_ok();
    }

    let events: Vec<Event> = server.get("/api/events").await.json();
    assert_eq!(events.len(), 3);
}

#[tokio::test]
async fn update_changes_only_the_given_field() {
    let store = InMemoryEventStore::new();
    let server = server_with(&store);
    let created = create(&server, &launch_party_body()).await;

    let response = server
        .put(&format!("/api/events/{}", created.id))
        .json(&json!({ "hall": "Hall 2" }))
        .await;

    response.assert_status_ok();
    let updated: Event = response.json();
    assert_eq!(updated.hall, "Hall 2");
    assert_eq!(
        Event {
            hall: created.hall.clone(),
            ..updated.clone()
        },
        created
    );
    assert_eq!(store.snapshot(created.id), Some(updated));
}

#[tokio::test]
async fn update_ignores_id_in_body() {
    let store = InMemoryEventStore::new();
    let server = server_with(&store);
    let created = create(&server, &launch_party_body()).await;
    let other = EventId::new();

    let response = server
        .put(&format!("/api/events/{}", created.id))
        .json(&json!({ "_id": other.to_string(), "name": "Renamed" }))
        .await;

    response.assert_status_ok();
    let updated: Event = response.json();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Renamed");
    assert!(!store.contains(other));
}

#[tokio::test]
async fn update_with_blank_name_is_rejected() {
    let store = InMemoryEventStore::new();
    let server = server_with(&store);
    let created = create(&server, &launch_party_body()).await;

    let response = server
        .put(&format!("/api/events/{}", created.id))
        .json(&json!({ "name": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(store.snapshot(created.id), Some(created));
}

#[tokio::test]
async fn nul_character_in_text_is_rejected_on_create_and_update() {
    let store = InMemoryEventStore::new();
    let server = server_with(&store);

    let mut body = launch_party_body();
    body["name"] = json!("a\u{0}b");
    let response = server.post("/api/events").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "VALIDATION_ERROR");
    assert!(store.is_empty());

    let created = create(&server, &launch_party_body()).await;
    let response = server
        .put(&format!("/api/events/{}", created.id))
        .json(&json!({ "name": "a\u{0}b" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(store.snapshot(created.id), Some(created));
}

#[tokio::test]
async fn missing_id_is_not_found_everywhere() {
    let server = server_with(&InMemoryEventStore::new());
    let path = format!("/api/events/{}", EventId::new());

    server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
    server
        .put(&path)
        .json(&json!({ "hall": "Hall 2" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    let server = server_with(&InMemoryEventStore::new());

    let response = server.get("/api/events/12345").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "INVALID_ID");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let store = InMemoryEventStore::new();
    let server = server_with(&store);
    let created = create(&server, &launch_party_body()).await;
    let path = format!("/api/events/{}", created.id);

    let response = server.delete(&path).await;
    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Event deleted successfully" }));

    server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_outage_is_internal_error_with_body() {
    let store = InMemoryEventStore::with_events([fixtures::event("Hall 1", "2025-01-01")]);
    let server = server_with(&store);
    store.set_unavailable(true);

    let response = server.get("/api/events").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "STORE_UNAVAILABLE");
    assert!(body["error"].is_string());

    server.get("/ready").await.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    server.get("/health").await.assert_status_ok();
}
