//! Storage abstraction for `Event` records.
//!
//! # Implementations
//!
//! - `PostgresEventStore` (in `event-space-postgres`): production storage
//! - `InMemoryEventStore` (in `event-space-testing`): fast, deterministic tests
//!
//! # Consistency
//!
//! Every mutating call is a single write. There is no version check: two
//! concurrent updates to the same record both succeed and the later one wins.
//!
//! # Example
//!
//! ```no_run
//! use event_space_core::{EventDraft, EventStore, EventStoreError};
//!
//! async fn book<S: EventStore>(store: &S, draft: EventDraft) -> Result<(), Box<dyn std::error::Error>> {
//!     let created = store.create(draft.validate()?).await?;
//!     let fetched = store.get(created.id).await?;
//!     assert_eq!(created, fetched);
//!     Ok(())
//! }
//! ```

use crate::event::{Event, EventId, EventPatch, NewEvent};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Boxed future returned by [`EventStore`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, EventStoreError>> + Send + 'a>>;

/// Errors that can occur during store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventStoreError {
    /// No record has this id.
    #[error("Event not found: {0}")]
    NotFound(EventId),

    /// The backing database could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(String),

    /// A stored record could not be decoded.
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}

/// Durable collection of [`Event`] records.
///
/// # Dyn Compatibility
///
/// Methods return boxed futures instead of using `async fn` so handlers can
/// hold an `Arc<dyn EventStore>` and tests can swap in the in-memory store.
pub trait EventStore: Send + Sync {
    /// Assign a fresh id, persist the record and return it.
    ///
    /// # Errors
    ///
    /// - `Unavailable` / `Database`: storage failure
    fn create(&self, event: NewEvent) -> StoreFuture<'_, Event>;

    /// Fetch one record.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no record with this id
    /// - `Unavailable` / `Database` / `Corrupt`: storage failure
    fn get(&self, id: EventId) -> StoreFuture<'_, Event>;

    /// Every stored record, in no particular order.
    ///
    /// # Errors
    ///
    /// - `Unavailable` / `Database` / `Corrupt`: storage failure
    fn list(&self) -> StoreFuture<'_, Vec<Event>>;

    /// Overwrite the fields set in `patch` and return the updated record.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no record with this id
    /// - `Unavailable` / `Database` / `Corrupt`: storage failure
    fn update(&self, id: EventId, patch: EventPatch) -> StoreFuture<'_, Event>;

    /// Remove a record permanently.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no record with this id
    /// - `Unavailable` / `Database`: storage failure
    fn delete(&self, id: EventId) -> StoreFuture<'_, ()>;

    /// Check that the backing storage answers.
    ///
    /// # Errors
    ///
    /// - `Unavailable` / `Database`: storage failure
    fn ping(&self) -> StoreFuture<'_, ()>;
}
