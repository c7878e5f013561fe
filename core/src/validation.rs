//! Request drafts and the checks that turn them into store inputs.
//!
//! Drafts mirror the JSON bodies clients send: every field is optional and
//! dates are plain strings. Validation collects every missing field of a
//! create request into one error so the client sees the whole problem at once.

use crate::event::{EventPatch, NewEvent};
use crate::schedule::{parse_date, parse_time};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a draft was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were absent or blank.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A text field in an update was present but blank.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Wire name of the field.
        field: &'static str,
    },

    /// A date or time string could not be parsed.
    #[error("{field} {value:?} is not a valid {expected}")]
    Malformed {
        /// Wire name of the field.
        field: &'static str,
        /// The rejected input.
        value: String,
        /// What the field should contain.
        expected: &'static str,
    },
}

const DATE_EXPECTATION: &str = "date (YYYY-MM-DD or RFC 3339)";
const TIME_EXPECTATION: &str = "time of day (HH:MM)";
const TEXT_EXPECTATION: &str = "text value (NUL characters are not allowed)";

/// Body of a create request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    /// Name of the person or occasion.
    pub name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone_number: Option<String>,
    /// Date in any accepted form.
    pub date: Option<String>,
    /// Time of day in any accepted form.
    pub time: Option<String>,
    /// Venue name.
    pub hall: Option<String>,
}

impl EventDraft {
    /// Check presence of every field, then parse `date` and `time`.
    ///
    /// Text fields are stored trimmed.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingFields`] listing every absent or blank field
    /// - [`ValidationError::Malformed`] if a text field contains a NUL
    ///   character or `date` or `time` cannot be parsed
    pub fn validate(self) -> Result<NewEvent, ValidationError> {
        let mut missing = Vec::new();

        let name = required(self.name, "name", &mut missing);
        let email = required(self.email, "email", &mut missing);
        let phone_number = required(self.phone_number, "phoneNumber", &mut missing);
        let date = required(self.date, "date", &mut missing);
        let time = required(self.time, "time", &mut missing);
        let hall = required(self.hall, "hall", &mut missing);

        let (Some(name), Some(email), Some(phone_number), Some(date), Some(time), Some(hall)) =
            (name, email, phone_number, date, time, hall)
        else {
            return Err(ValidationError::MissingFields(missing));
        };

        let name = storable(name, "name")?;
        let email = storable(email, "email")?;
        let phone_number = storable(phone_number, "phoneNumber")?;
        let hall = storable(hall, "hall")?;

        let parsed_date = parse_date(&date).ok_or_else(|| ValidationError::Malformed {
            field: "date",
            value: date.clone(),
            expected: DATE_EXPECTATION,
        })?;
        let parsed_time = parse_time(&time).ok_or_else(|| ValidationError::Malformed {
            field: "time",
            value: time.clone(),
            expected: TIME_EXPECTATION,
        })?;

        Ok(NewEvent {
            name,
            email,
            phone_number,
            date: parsed_date,
            time: parsed_time,
            hall,
        })
    }
}

/// Body of an update request.
///
/// Keys not listed here, `_id` included, are ignored during deserialization,
/// which is what keeps the id immutable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatchDraft {
    /// Replacement name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Replacement phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Replacement date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Replacement time of day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Replacement hall.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hall: Option<String>,
}

impl EventPatchDraft {
    /// Validate the fields that are present.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyField`] if a text field is blank
    /// - [`ValidationError::Malformed`] if a text field contains a NUL
    ///   character or `date` or `time` cannot be parsed
    pub fn validate(self) -> Result<EventPatch, ValidationError> {
        Ok(EventPatch {
            name: non_blank(self.name, "name")?,
            email: non_blank(self.email, "email")?,
            phone_number: non_blank(self.phone_number, "phoneNumber")?,
            date: self
                .date
                .map(|raw| {
                    parse_date(&raw).ok_or(ValidationError::Malformed {
                        field: "date",
                        value: raw,
                        expected: DATE_EXPECTATION,
                    })
                })
                .transpose()?,
            time: self
                .time
                .map(|raw| {
                    parse_time(&raw).ok_or(ValidationError::Malformed {
                        field: "time",
                        value: raw,
                        expected: TIME_EXPECTATION,
                    })
                })
                .transpose()?,
            hall: non_blank(self.hall, "hall")?,
        })
    }
}

fn required(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}

fn non_blank(value: Option<String>, field: &'static str) -> Result<Option<String>, ValidationError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if v.is_empty() => Err(ValidationError::EmptyField { field }),
        Some(v) => storable(v, field).map(Some),
        None => Ok(None),
    }
}

/// PostgreSQL `TEXT` cannot hold NUL, so no store accepts it.
fn storable(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::Malformed {
            field,
            value,
            expected: TEXT_EXPECTATION,
        });
    }
    Ok(value)
}
