//! Event Space API client implementation

use crate::error::ClientError;
use event_space_core::{Event, EventDraft, EventId, EventPatchDraft};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

/// Event Space API client
///
/// Cheap to clone: clones share the connection pool.
#[derive(Clone, Debug)]
pub struct EventSpaceClient {
    client: Client,
    base_url: String,
}

impl EventSpaceClient {
    /// Create a client for the server at `base_url` (for example
    /// `http://localhost:5000`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), base_url)
    }

    /// Create a client that reuses an existing `reqwest::Client`.
    #[must_use]
    pub fn with_http_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The server this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn events_url(&self) -> String {
        format!("{}/api/events", self.base_url)
    }

    fn event_url(&self, id: EventId) -> String {
        format!("{}/api/events/{id}", self.base_url)
    }

    /// Create a booking.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 400 when the draft is rejected,
    /// or a transport/parse error.
    pub async fn create(&self, draft: &EventDraft) -> Result<Event, ClientError> {
        let response = self
            .client
            .post(self.events_url())
            .json(draft)
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        let event: Event = expect_json(response, StatusCode::CREATED).await?;
        tracing::debug!(event_id = %event.id, "Event created");
        Ok(event)
    }

    /// Fetch every booking.
    ///
    /// # Errors
    ///
    /// Returns transport, parse or API errors.
    pub async fn list(&self) -> Result<Vec<Event>, ClientError> {
        let response = self
            .client
            .get(self.events_url())
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        expect_json(response, StatusCode::OK).await
    }

    /// Fetch one booking.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 if no booking has `id`.
    pub async fn get(&self, id: EventId) -> Result<Event, ClientError> {
        let response = self
            .client
            .get(self.event_url(id))
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        expect_json(response, StatusCode::OK).await
    }

    /// Update the fields set in `patch`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 if no booking has `id`, or
    /// 400 if a field is rejected.
    pub async fn update(&self, id: EventId, patch: &EventPatchDraft) -> Result<Event, ClientError> {
        let response = self
            .client
            .put(self.event_url(id))
            .json(patch)
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        expect_json(response, StatusCode::OK).await
    }

    /// Delete a booking.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Api` with status 404 if no booking has `id`.
    pub async fn delete(&self, id: EventId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.event_url(id))
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {
                tracing::debug!(event_id = %id, "Event deleted");
                Ok(())
            }
            status => Err(api_error(status, response).await),
        }
    }
}

async fn expect_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T, ClientError> {
    match response.status() {
        status if status == expected => response
            .json::<T>()
            .await
            .map_err(|e| ClientError::ResponseParseFailed(e.to_string())),
        status => Err(api_error(status, response).await),
    }
}

async fn api_error(status: StatusCode, response: Response) -> ClientError {
    let body = response.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), "API request rejected");
    ClientError::from_body(status.as_u16(), &body)
}
