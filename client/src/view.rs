//! Local list helpers for presenting bookings.
//!
//! The API returns records in storage order with no query parameters, so
//! previews and filters run on the client after a `list()`.
//!
//! ```
//! use event_space_client::view::{EventFilter, latest};
//! # let events = Vec::new();
//!
//! let home = latest(&events, 5);
//! let in_hall_3 = EventFilter::default().hall("hall 3").apply(&events);
//! # assert!(home.is_empty() && in_hall_3.is_empty());
//! ```

use chrono::NaiveDate;
use event_space_core::Event;
use std::cmp::Reverse;

/// Number of bookings shown on the home screen preview.
pub const PREVIEW_LEN: usize = 5;

/// The `n` bookings with the latest date, most recent first.
///
/// Bookings on the same day are ordered by time of day, latest first.
#[must_use]
pub fn latest(events: &[Event], n: usize) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| Reverse((event.date, event.time)));
    sorted.truncate(n);
    sorted
}

/// Bookings whose date falls on `day` (UTC calendar day).
#[must_use]
pub fn filter_by_day(events: &[Event], day: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.date.date_naive() == day)
        .cloned()
        .collect()
}

/// Bookings whose hall contains `needle`, ignoring case.
///
/// A blank needle matches everything.
#[must_use]
pub fn filter_by_hall(events: &[Event], needle: &str) -> Vec<Event> {
    let needle = needle.trim().to_lowercase();
    events
        .iter()
        .filter(|event| event.hall.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Combined day and hall filter. Unset criteria match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventFilter {
    day: Option<NaiveDate>,
    hall: Option<String>,
}

impl EventFilter {
    /// Keep only bookings on `day`.
    #[must_use]
    pub const fn day(mut self, day: NaiveDate) -> Self {
        self.day = Some(day);
        self
    }

    /// Keep only bookings whose hall contains `needle`, ignoring case.
    #[must_use]
    pub fn hall(mut self, needle: impl Into<String>) -> Self {
        self.hall = Some(needle.into());
        self
    }

    /// Drop every criterion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether no criterion is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.day.is_none() && self.hall.is_none()
    }

    /// Whether `event` passes every criterion.
    #[must_use]
    pub fn matches(&self, event: &Event) -> bool {
        let day_ok = self.day.is_none_or(|day| event.date.date_naive() == day);
        let hall_ok = self.hall.as_deref().is_none_or(|needle| {
            event
                .hall
                .to_lowercase()
                .contains(&needle.trim().to_lowercase())
        });
        day_ok && hall_ok
    }

    /// The bookings in `events` that pass, in their original order.
    #[must_use]
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events
            .iter()
            .filter(|event| self.matches(event))
            .cloned()
            .collect()
    }
}

/// Capitalise the first letter of each space-separated word and lowercase
/// the rest, for display of names and halls.
#[must_use]
pub fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use event_space_testing::fixtures;

    fn day(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    fn sample() -> Vec<Event> {
        vec![
            fixtures::event("Hall 1", "2025-01-10"),
            fixtures::event("Main Hall", "2025-03-01"),
            fixtures::event("hall 3", "2025-02-14"),
            fixtures::event("Garden", "2025-03-01T20:00:00Z"),
            fixtures::event("Hall 2", "2024-12-31"),
            fixtures::event("HALL 3 annex", "2025-05-05"),
            fixtures::event("Hall 1", "2025-04-01"),
        ]
    }

    #[test]
    fn latest_returns_most_recent_first() {
        let events = sample();
        let preview = latest(&events, PREVIEW_LEN);

        assert_eq!(preview.len(), 5);
        let dates: Vec<String> = preview
            .iter()
            .map(|event| event.date.format("%Y-%m-%d").to_string())
            .collect();
        assert_eq!(
            dates,
            ["2025-05-05", "2025-04-01", "2025-03-01", "2025-03-01", "2025-02-14"]
        );
        assert!(preview.windows(2).all(|pair| pair[0].date >= pair[1].date));
    }

    #[test]
    fn latest_with_fewer_events_returns_all() {
        let events = sample()[..2].to_vec();
        assert_eq!(latest(&events, PREVIEW_LEN).len(), 2);
        assert!(latest(&[], PREVIEW_LEN).is_empty());
    }

    #[test]
    fn day_filter_matches_calendar_day() {
        let events = sample();
        let on_march_first = filter_by_day(&events, day("2025-03-01"));

        assert_eq!(on_march_first.len(), 2);
        assert!(filter_by_day(&events, day("2025-03-02")).is_empty());
    }

    #[test]
    fn hall_filter_is_case_insensitive_substring() {
        let events = sample();
        let halls: Vec<String> = filter_by_hall(&events, "Hall 3")
            .into_iter()
            .map(|event| event.hall)
            .collect();

        assert_eq!(halls, ["hall 3", "HALL 3 annex"]);
        assert_eq!(filter_by_hall(&events, "").len(), events.len());
    }

    #[test]
    fn combined_filter_and_clear() {
        let events = sample();
        let mut filter = EventFilter::default().day(day("2025-03-01")).hall("main");

        let matched = filter.apply(&events);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].hall, "Main Hall");

        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&events), events);
    }

    #[test]
    fn title_case_normalises_words() {
        assert_eq!(title_case("LAUNCH party"), "Launch Party");
        assert_eq!(title_case("hall  3"), "Hall  3");
        assert_eq!(title_case(""), "");
    }
}
