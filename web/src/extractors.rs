//! Custom Axum extractors.
//!
//! - `JsonBody<T>`: like `Json<T>`, but rejects with an [`AppError`] body
//! - `EventIdParam`: parses the `:id` path segment into an [`EventId`]
//! - `CorrelationId`: the request's correlation id
//!
//! # Example
//!
//! ```ignore
//! async fn handler(
//!     EventIdParam(id): EventIdParam,
//!     JsonBody(draft): JsonBody<EventPatchDraft>,
//! ) -> WebResult<Json<Event>> {
//!     // ...
//! }
//! ```

use crate::error::AppError;
use axum::{
    Json, async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use event_space_core::EventId;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// JSON request body that rejects with the API's error shape.
///
/// Axum's own `Json` rejection is plain text with a 415 or 422 status. Every
/// unreadable body here is a 400 `BAD_REQUEST` with a JSON body instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::bad_request(rejection.body_text())),
        }
    }
}

/// The `:id` path parameter as an [`EventId`].
///
/// A segment that is not a well-formed id is rejected with 400
/// `INVALID_ID` before any store lookup happens.
#[derive(Debug, Clone, Copy)]
pub struct EventIdParam(pub EventId);

#[async_trait]
impl<S> FromRequestParts<S> for EventIdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::invalid_id(rejection.body_text()))?;

        Ok(Self(EventId::parse(&raw)?))
    }
}

/// Correlation id for request tracing.
///
/// Read from the request extensions, where [`crate::middleware::correlation_id_layer`]
/// stores it. Without the middleware a fresh id is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for CorrelationId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .extensions
            .get::<Self>()
            .copied()
            .unwrap_or_else(|| Self(Uuid::new_v4()));

        Ok(id)
    }
}
