//! The `Event` record and the typed inputs used to create and change it.

use crate::schedule::{date_format, time_format};
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Error returned when a path segment is not a well-formed event id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid event id: {0:?}")]
pub struct ParseEventIdError(String);

/// Server-generated identifier of an [`Event`].
///
/// A UUID v4 rendered in hyphenated form on the wire (`_id`). Ids are assigned
/// once by [`EventId::new`] when a record is created and never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID (for rows read back from storage).
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an id received from a client.
    ///
    /// # Errors
    ///
    /// Returns [`ParseEventIdError`] if `raw` is not a UUID.
    pub fn parse(raw: &str) -> Result<Self, ParseEventIdError> {
        raw.parse()
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for EventId {
    type Err = ParseEventIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ParseEventIdError(s.to_string()))
    }
}

/// A stored booking.
///
/// Every field is always populated. The JSON shape matches what clients of
/// the original service expect:
///
/// ```json
/// {
///   "_id": "0b8f3c4e-6f0a-4d0e-9d43-2f7a1c9b5e11",
///   "name": "Launch Party",
///   "email": "e@x.com",
///   "phoneNumber": "555-0100",
///   "date": "2025-06-01T00:00:00Z",
///   "time": "18:00",
///   "hall": "Hall 3"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Immutable identifier.
    #[serde(rename = "_id")]
    pub id: EventId,
    /// Name of the person or occasion.
    pub name: String,
    /// Contact email. Not format-checked.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Day of the booking (midnight UTC when only a calendar date was given).
    #[serde(with = "date_format")]
    pub date: DateTime<Utc>,
    /// Time of day, minute precision.
    #[serde(with = "time_format")]
    pub time: NaiveTime,
    /// Free-text venue name.
    pub hall: String,
}

impl Event {
    /// Overwrite the fields present in `patch`. The id is untouched.
    pub fn apply(&mut self, patch: EventPatch) {
        let EventPatch {
            name,
            email,
            phone_number,
            date,
            time,
            hall,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone_number) = phone_number {
            self.phone_number = phone_number;
        }
        if let Some(date) = date {
            self.date = date;
        }
        if let Some(time) = time {
            self.time = time;
        }
        if let Some(hall) = hall {
            self.hall = hall;
        }
    }
}

/// A validated set of fields for a new [`Event`].
///
/// Built by [`EventDraft::validate`](crate::validation::EventDraft::validate);
/// the fields are private so an unchecked value cannot be assembled elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEvent {
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) phone_number: String,
    pub(crate) date: DateTime<Utc>,
    pub(crate) time: NaiveTime,
    pub(crate) hall: String,
}

impl NewEvent {
    /// Name of the person or occasion.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Contact phone number.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Normalised date.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Normalised time of day.
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// Venue name.
    #[must_use]
    pub fn hall(&self) -> &str {
        &self.hall
    }

    /// Attach an id, producing the record a store persists.
    #[must_use]
    pub fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            date: self.date,
            time: self.time,
            hall: self.hall,
        }
    }
}

/// A validated partial update. `None` leaves the stored value as it is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement email.
    pub email: Option<String>,
    /// Replacement phone number.
    pub phone_number: Option<String>,
    /// Replacement date.
    pub date: Option<DateTime<Utc>>,
    /// Replacement time of day.
    pub time: Option<NaiveTime>,
    /// Replacement hall.
    pub hall: Option<String>,
}

impl EventPatch {
    /// True when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.hall.is_none()
    }
}
