//! # Event Space Core
//!
//! Domain types for the Event Space booking backend.
//!
//! This crate has no I/O. It defines:
//!
//! - [`event`]: the `Event` record, its identifier and the typed inputs the
//!   store accepts (`NewEvent`, `EventPatch`)
//! - [`schedule`]: parsing and canonical formatting of the `date` and `time`
//!   fields
//! - [`validation`]: raw request drafts and the checks that turn them into
//!   typed inputs
//! - [`event_store`]: the `EventStore` trait implemented by the Postgres and
//!   in-memory backends
//!
//! ## Request Flow
//!
//! ```text
//! JSON body ──► EventDraft ──validate()──► NewEvent ──► EventStore::create ──► Event
//!           └─► EventPatchDraft ──validate()──► EventPatch ──► EventStore::update
//! ```
//!
//! A `NewEvent` can only be obtained through validation, so a store can never
//! be asked to persist a partial record.

pub mod event;
pub mod event_store;
pub mod schedule;
pub mod validation;

pub use event::{Event, EventId, EventPatch, NewEvent, ParseEventIdError};
pub use event_store::{EventStore, EventStoreError, StoreFuture};
pub use validation::{EventDraft, EventPatchDraft, ValidationError};
