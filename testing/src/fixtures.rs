//! Ready-made drafts and events.

#![allow(clippy::expect_used)] // Fixtures are hard-coded and known to be valid

use event_space_core::{Event, EventDraft, EventId, NewEvent};

/// The booking used throughout the API examples.
#[must_use]
pub fn launch_party_draft() -> EventDraft {
    EventDraft {
        name: Some("Launch Party".to_string()),
        email: Some("e@x.com".to_string()),
        phone_number: Some("555-0100".to_string()),
        date: Some("2025-06-01".to_string()),
        time: Some("18:00".to_string()),
        hall: Some("Hall 3".to_string()),
    }
}

/// [`launch_party_draft`], validated.
#[must_use]
pub fn launch_party() -> NewEvent {
    launch_party_draft()
        .validate()
        .expect("launch party fixture is valid")
}

/// A complete draft with the given name, hall and date.
#[must_use]
pub fn draft(name: &str, hall: &str, date: &str) -> EventDraft {
    EventDraft {
        name: Some(name.to_string()),
        hall: Some(hall.to_string()),
        date: Some(date.to_string()),
        ..launch_party_draft()
    }
}

/// A stored-looking event with a fresh id, in `hall` on `date`.
///
/// # Panics
///
/// Panics if `date` is not an accepted date string.
#[must_use]
pub fn event(hall: &str, date: &str) -> Event {
    draft(&format!("Booking {date}"), hall, date)
        .validate()
        .expect("fixture date must parse")
        .into_event(EventId::new())
}
