//! Event booking endpoints.
//!
//! - POST /api/events - Create a booking
//! - GET /api/events - List every booking
//! - GET /api/events/:id - Get one booking
//! - PUT /api/events/:id - Update some fields of a booking
//! - DELETE /api/events/:id - Delete a booking

use crate::extractors::{EventIdParam, JsonBody};
use crate::state::AppState;
use crate::WebResult;
use axum::{Json, extract::State, http::StatusCode};
use event_space_core::{Event, EventDraft, EventPatchDraft};
use serde::{Deserialize, Serialize};

/// Body returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEventResponse {
    /// Confirmation text
    pub message: String,
}

impl DeleteEventResponse {
    fn deleted() -> Self {
        Self {
            message: "Event deleted successfully".to_string(),
        }
    }
}

/// Create a booking.
///
/// Every field is required. All missing or blank fields are reported together
/// in one 400, and nothing is stored.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:5000/api/events \
///   -H "Content-Type: application/json" \
///   -d '{
///     "name": "Launch Party",
///     "email": "e@x.com",
///     "phoneNumber": "555-0100",
///     "date": "2025-06-01",
///     "time": "18:00",
///     "hall": "Hall 3"
///   }'
/// ```
///
/// # Errors
///
/// 400 for an unreadable body or a failed validation, 500 if the store fails.
#[tracing::instrument(skip(state, draft))]
pub async fn create_event(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<EventDraft>,
) -> WebResult<(StatusCode, Json<Event>)> {
    let new_event = draft.validate()?;
    let event = state.store.create(new_event).await?;

    tracing::info!(event_id = %event.id, hall = %event.hall, "Event created");
    Ok((StatusCode::CREATED, Json(event)))
}

/// List every booking, in storage order.
///
/// ```bash
/// curl http://localhost:5000/api/events
/// ```
///
/// # Errors
///
/// 500 if the store fails.
#[tracing::instrument(skip(state))]
pub async fn list_events(State(state): State<AppState>) -> WebResult<Json<Vec<Event>>> {
    let events = state.store.list().await?;
    tracing::debug!(count = events.len(), "Events listed");
    Ok(Json(events))
}

/// Get one booking.
///
/// # Errors
///
/// 400 for a malformed id, 404 if no booking has it, 500 if the store fails.
#[tracing::instrument(skip(state))]
pub async fn get_event(
    State(state): State<AppState>,
    EventIdParam(id): EventIdParam,
) -> WebResult<Json<Event>> {
    Ok(Json(state.store.get(id).await?))
}

/// Update any subset of a booking's fields.
///
/// Absent and `null` fields are left unchanged. Unknown keys, `_id`
/// included, are ignored. `{}` returns the current record.
///
/// ```bash
/// curl -X PUT http://localhost:5000/api/events/<id> \
///   -H "Content-Type: application/json" \
///   -d '{"hall": "Hall 2"}'
/// ```
///
/// # Errors
///
/// 400 for a malformed id or an invalid field, 404 if no booking has the id,
/// 500 if the store fails.
#[tracing::instrument(skip(state, draft))]
pub async fn update_event(
    State(state): State<AppState>,
    EventIdParam(id): EventIdParam,
    JsonBody(draft): JsonBody<EventPatchDraft>,
) -> WebResult<Json<Event>> {
    let patch = draft.validate()?;

    if patch.is_empty() {
        tracing::debug!(event_id = %id, "Empty update, returning current record");
        return Ok(Json(state.store.get(id).await?));
    }

    let event = state.store.update(id, patch).await?;
    tracing::info!(event_id = %id, "Event updated");
    Ok(Json(event))
}

/// Delete a booking.
///
/// # Errors
///
/// 400 for a malformed id, 404 if no booking has it, 500 if the store fails.
#[tracing::instrument(skip(state))]
pub async fn delete_event(
    State(state): State<AppState>,
    EventIdParam(id): EventIdParam,
) -> WebResult<Json<DeleteEventResponse>> {
    state.store.delete(id).await?;

    tracing::info!(event_id = %id, "Event deleted");
    Ok(Json(DeleteEventResponse::deleted()))
}
