//! In-memory event store for fast, deterministic testing.

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Panics only on a poisoned lock

use event_space_core::{Event, EventId, EventPatch, EventStore, EventStoreError, NewEvent, StoreFuture};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// `HashMap`-backed [`EventStore`].
///
/// Clones share the same records, so a test can keep a handle while the
/// router owns another.
///
/// # Simulating outages
///
/// [`set_unavailable(true)`](Self::set_unavailable) makes every operation
/// fail with `EventStoreError::Unavailable` until switched back, which is how
/// tests reach the 500 paths of the API.
///
/// # Example
///
/// ```
/// use event_space_testing::{InMemoryEventStore, fixtures};
/// use event_space_core::EventStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = InMemoryEventStore::new();
/// let created = store.create(fixtures::launch_party()).await?;
/// assert_eq!(store.len(), 1);
/// assert!(store.contains(created.id));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryEventStore {
    events: Arc<RwLock<HashMap<EventId, Event>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryEventStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `events`.
    #[must_use]
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        let store = Self::new();
        store
            .events
            .write()
            .unwrap()
            .extend(events.into_iter().map(|event| (event.id, event)));
        store
    }

    /// Toggle simulated unavailability.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().unwrap().len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().unwrap().is_empty()
    }

    /// True when a record with `id` is stored.
    #[must_use]
    pub fn contains(&self, id: EventId) -> bool {
        self.events.read().unwrap().contains_key(&id)
    }

    /// Snapshot of a stored record, bypassing the outage switch.
    #[must_use]
    pub fn snapshot(&self, id: EventId) -> Option<Event> {
        self.events.read().unwrap().get(&id).cloned()
    }

    fn check_available(&self) -> Result<(), EventStoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(EventStoreError::Unavailable(
                "in-memory store switched off".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    fn create_now(&self, new_event: NewEvent) -> Result<Event, EventStoreError> {
        self.check_available()?;
        let event = new_event.into_event(EventId::new());
        self.events.write().unwrap().insert(event.id, event.clone());
        Ok(event)
    }

    fn get_now(&self, id: EventId) -> Result<Event, EventStoreError> {
        self.check_available()?;
        self.events
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(EventStoreError::NotFound(id))
    }

    fn list_now(&self) -> Result<Vec<Event>, EventStoreError> {
        self.check_available()?;
        Ok(self.events.read().unwrap().values().cloned().collect())
    }

    fn update_now(&self, id: EventId, patch: EventPatch) -> Result<Event, EventStoreError> {
        self.check_available()?;
        let mut events = self.events.write().unwrap();
        let event = events.get_mut(&id).ok_or(EventStoreError::NotFound(id))?;
        event.apply(patch);
        Ok(event.clone())
    }

    fn delete_now(&self, id: EventId) -> Result<(), EventStoreError> {
        self.check_available()?;
        self.events
            .write()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(EventStoreError::NotFound(id))
    }
}

impl EventStore for InMemoryEventStore {
    fn create(&self, event: NewEvent) -> StoreFuture<'_, Event> {
        let result = self.create_now(event);
        Box::pin(async move { result })
    }

    fn get(&self, id: EventId) -> StoreFuture<'_, Event> {
        let result = self.get_now(id);
        Box::pin(async move { result })
    }

    fn list(&self) -> StoreFuture<'_, Vec<Event>> {
        let result = self.list_now();
        Box::pin(async move { result })
    }

    fn update(&self, id: EventId, patch: EventPatch) -> StoreFuture<'_, Event> {
        let result = self.update_now(id, patch);
        Box::pin(async move { result })
    }

    fn delete(&self, id: EventId) -> StoreFuture<'_, ()> {
        let result = self.delete_now(id);
        Box::pin(async move { result })
    }

    fn ping(&self) -> StoreFuture<'_, ()> {
        let result = self.check_available();
        Box::pin(async move { result })
    }
}
