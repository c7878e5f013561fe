//! Date and time-of-day normalisation.
//!
//! Clients send `date` and `time` as free-form strings. They are normalised
//! at the API boundary into two canonical values:
//!
//! | Field  | Stored as        | Accepted input                                      | Output                 |
//! |--------|------------------|-----------------------------------------------------|------------------------|
//! | `date` | `DateTime<Utc>`  | RFC 3339, naive date-time (read as UTC), `YYYY-MM-DD` | RFC 3339, `Z` suffix   |
//! | `time` | `NaiveTime`      | `HH:MM`, `HH:MM:SS`, any accepted date-time         | `HH:MM`                |
//!
//! A bare calendar date becomes midnight UTC. Dates keep at most microsecond
//! precision, the resolution of a PostgreSQL `timestamptz`. When `time` arrives as a full
//! date-time (older mobile clients sent one) its UTC time of day is kept and
//! the calendar part discarded. Seconds never survive normalisation of `time`.

use chrono::{
    DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, SubsecRound, Timelike, Utc,
};

/// Naive date-time layouts accepted for `date`, tried in order.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Time-of-day layouts accepted for `time`, tried in order.
const TIME_OF_DAY_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];

/// Parse a client-supplied `date` into a UTC timestamp.
///
/// Returns `None` for empty or unrecognised input.
///
/// # Examples
///
/// ```
/// use event_space_core::schedule::{format_date, parse_date};
///
/// let date = parse_date("2025-06-01").unwrap();
/// assert_eq!(format_date(&date), "2025-06-01T00:00:00Z");
///
/// let date = parse_date("2025-06-01T20:00:00+02:00").unwrap();
/// assert_eq!(format_date(&date), "2025-06-01T18:00:00Z");
/// ```
#[must_use]
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|| {
            NAIVE_DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|day| day.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc())
        })
        .map(|date| date.trunc_subsecs(MICROSECOND_DIGITS))
}

/// Fractional-second digits kept on a parsed `date`.
const MICROSECOND_DIGITS: u16 = 6;

/// Parse a client-supplied `time` into a time of day, truncated to minutes.
///
/// Returns `None` for empty or unrecognised input.
///
/// # Examples
///
/// ```
/// use event_space_core::schedule::{format_time, parse_time};
///
/// assert_eq!(format_time(&parse_time("18:00").unwrap()), "18:00");
/// assert_eq!(format_time(&parse_time("07:45:59").unwrap()), "07:45");
/// assert_eq!(format_time(&parse_time("2025-06-01T18:30:00Z").unwrap()), "18:30");
/// ```
#[must_use]
pub fn parse_time(input: &str) -> Option<NaiveTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    TIME_OF_DAY_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(input, format).ok())
        .or_else(|| {
            // A bare date carries no time of day, so only full date-times qualify.
            if input.len() <= "YYYY-MM-DD".len() {
                return None;
            }
            parse_date(input).map(|timestamp| timestamp.time())
        })
        .map(truncate_to_minute)
}

/// Canonical wire form of a `date`.
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Canonical wire form of a `time`.
#[must_use]
pub fn format_time(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Drop seconds and sub-second precision.
#[must_use]
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Serde adapter writing `date` in canonical form and reading any accepted form.
pub mod date_format {
    use super::{format_date, parse_date};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    /// Serialize as RFC 3339.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(date))
    }

    /// Deserialize from any form accepted by [`parse_date`].
    ///
    /// # Errors
    ///
    /// Fails when the string is not a recognised date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).ok_or_else(|| D::Error::custom(format!("invalid date: {raw:?}")))
    }
}

/// Serde adapter writing `time` as `HH:MM` and reading any accepted form.
pub mod time_format {
    use super::{format_time, parse_time};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    /// Serialize as `HH:MM`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_time(time))
    }

    /// Deserialize from any form accepted by [`parse_time`].
    ///
    /// # Errors
    ///
    /// Fails when the string is not a recognised time.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).ok_or_else(|| D::Error::custom(format!("invalid time: {raw:?}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    mod date_tests {
        use super::*;

        #[test]
        fn bare_date_is_midnight_utc() {
            let date = parse_date("2025-06-01").expect("valid date");
            assert_eq!(date, Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
        }

        #[test]
        fn rfc3339_offset_is_converted_to_utc() {
            let date = parse_date("2025-06-01T20:00:00+02:00").expect("valid date");
            assert_eq!(date, Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap());
        }

        #[test]
        fn javascript_iso_string_is_accepted() {
            let date = parse_date("2025-06-01T18:00:00.000Z").expect("valid date");
            assert_eq!(format_date(&date), "2025-06-01T18:00:00Z");
        }

        #[test]
        fn nanoseconds_are_truncated_to_microseconds() {
            let date = parse_date("2025-06-01T18:00:00.123456789Z").expect("valid date");
            assert_eq!(format_date(&date), "2025-06-01T18:00:00.123456Z");

            let naive = parse_date("2025-06-01T18:00:00.123456789").expect("valid date");
            assert_eq!(naive, date);
        }

        #[test]
        fn naive_date_time_is_read_as_utc() {
            let date = parse_date("2025-06-01 18:30").expect("valid date");
            assert_eq!(date, Utc.with_ymd_and_hms(2025, 6, 1, 18, 30, 0).unwrap());
        }

        #[test]
        fn garbage_is_rejected() {
            assert!(parse_date("").is_none());
            assert!(parse_date("   ").is_none());
            assert!(parse_date("next tuesday").is_none());
            assert!(parse_date("2025-13-01").is_none());
        }

        #[test]
        fn canonical_form_has_z_suffix() {
            let date = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
            assert_eq!(format_date(&date), "2025-06-01T00:00:00Z");
        }
    }

    mod time_tests {
        use super::*;

        #[test]
        fn hours_and_minutes() {
            let time = parse_time("18:00").expect("valid time");
            assert_eq!(time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        }

        #[test]
        fn seconds_are_truncated() {
            let time = parse_time("07:45:59").expect("valid time");
            assert_eq!(format_time(&time), "07:45");
        }

        #[test]
        fn full_timestamp_keeps_utc_time_of_day() {
            let time = parse_time("2025-06-01T18:30:12.000Z").expect("valid time");
            assert_eq!(format_time(&time), "18:30");
        }

        #[test]
        fn bare_date_is_not_a_time() {
            assert!(parse_time("2025-06-01").is_none());
        }

        #[test]
        fn garbage_is_rejected() {
            assert!(parse_time("").is_none());
            assert!(parse_time("25:00").is_none());
            assert!(parse_time("six pm").is_none());
        }
    }

    proptest! {
        #[test]
        fn formatted_time_parses_back(hour in 0u32..24, minute in 0u32..60) {
            let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
            prop_assert_eq!(parse_time(&format_time(&time)), Some(time));
        }

        #[test]
        fn formatted_date_parses_back(secs in 0i64..4_102_444_800) {
            let date = Utc.timestamp_opt(secs, 0).unwrap();
            prop_assert_eq!(parse_date(&format_date(&date)), Some(date));
        }
    }
}
