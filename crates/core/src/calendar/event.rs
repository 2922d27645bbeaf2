//! Typed calendar events.
//!
//! A [`RawEvent`] is classified into one of two variants depending on whether
//! its endpoints carry a time of day. Both variants expose the same
//! capabilities (dates, span length, canonical ordering, rendering
//! primitives) through [`Event`], which dispatches by matching.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Timelike};
use serde::Serialize;

use super::error::EventError;
use super::html::html_escape;
use super::time::{
    brief_time, brief_time_range, has_time_component, parse_date, parse_local_datetime,
    short_date, short_datetime,
};
use super::types::RawEvent;

/// Seconds from midnight to noon.
const NOON_SECONDS: u32 = 12 * 60 * 60;

/// Descriptive fields shared by both event variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDetails {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub categories: Vec<String>,
}

impl EventDetails {
    fn from_raw(raw: &RawEvent) -> Self {
        Self {
            title: raw.title.clone(),
            description: raw.description.clone(),
            url: raw.url.clone(),
            image_url: raw.image_url.clone(),
            categories: raw.categories.clone(),
        }
    }
}

/// An all-day event. `end` is the exclusive end date as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateEvent {
    #[serde(flatten)]
    pub details: EventDetails,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateEvent {
    /// Inclusive last day, never before the start.
    pub fn end_date(&self) -> NaiveDate {
        self.end
            .pred_opt()
            .map_or(self.start, |last| last.max(self.start))
    }
}

/// A timed event, with both endpoints in local wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTimeEvent {
    #[serde(flatten)]
    pub details: EventDetails,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateTimeEvent {
    /// Last day the event is drawn on.
    ///
    /// An end on a later day only claims that day when it falls after noon;
    /// otherwise the event is drawn through the previous day.
    pub fn rendered_end_date(&self) -> NaiveDate {
        let start = self.start.date();
        let end = self.end.date();
        if end <= start {
            return start;
        }

        if self.end.time().num_seconds_from_midnight() > NOON_SECONDS {
            end
        } else {
            end.pred_opt().map_or(start, |previous| previous.max(start))
        }
    }
}

/// A classified calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    Date(DateEvent),
    DateTime(DateTimeEvent),
}

impl Event {
    /// Classifies a raw record, converting timestamps into `tz`.
    pub fn from_raw<Tz: TimeZone>(raw: &RawEvent, tz: &Tz) -> Result<Self, EventError> {
        let details = EventDetails::from_raw(raw);
        let invalid = |value: &str| EventError::InvalidTimestamp {
            title: raw.title.clone(),
            value: value.to_string(),
        };

        match (
            has_time_component(&raw.start_at),
            has_time_component(&raw.end_at),
        ) {
            (false, false) => {
                let start = parse_date(&raw.start_at).ok_or_else(|| invalid(&raw.start_at))?;
                let end = parse_date(&raw.end_at).ok_or_else(|| invalid(&raw.end_at))?;
                Ok(Event::Date(DateEvent {
                    details,
                    start,
                    end,
                }))
            }
            (true, true) => {
                let start = parse_local_datetime(&raw.start_at, tz)
                    .ok_or_else(|| invalid(&raw.start_at))?;
                let end =
                    parse_local_datetime(&raw.end_at, tz).ok_or_else(|| invalid(&raw.end_at))?;
                Ok(Event::DateTime(DateTimeEvent {
                    details,
                    start,
                    end,
                }))
            }
            _ => Err(EventError::MalformedEvent {
                title: raw.title.clone(),
                start_at: raw.start_at.clone(),
                end_at: raw.end_at.clone(),
            }),
        }
    }

    pub fn details(&self) -> &EventDetails {
        match self {
            Event::Date(event) => &event.details,
            Event::DateTime(event) => &event.details,
        }
    }

    pub fn title(&self) -> &str {
        &self.details().title
    }

    /// Returns true if this is an all-day event.
    pub fn is_all_day(&self) -> bool {
        matches!(self, Event::Date(_))
    }

    pub fn start_date(&self) -> NaiveDate {
        match self {
            Event::Date(event) => event.start,
            Event::DateTime(event) => event.start.date(),
        }
    }

    /// Calendar date of the end. Inclusive for all-day events, the local date
    /// of the end instant for timed ones.
    pub fn end_date(&self) -> NaiveDate {
        match self {
            Event::Date(event) => event.end_date(),
            Event::DateTime(event) => event.end.date(),
        }
    }

    /// Last grid day the event occupies.
    pub fn rendered_end_date(&self) -> NaiveDate {
        match self {
            Event::Date(event) => event.end_date(),
            Event::DateTime(event) => event.rendered_end_date(),
        }
    }

    /// Number of days the event occupies beyond its start day.
    pub fn multi_length(&self) -> i64 {
        (self.rendered_end_date() - self.start_date()).num_days()
    }

    /// Returns true if the event is drawn as a horizontal segment.
    ///
    /// All-day events always are, even when they last a single day.
    pub fn is_spanning(&self) -> bool {
        match self {
            Event::Date(_) => true,
            Event::DateTime(_) => self.multi_length() > 0,
        }
    }

    fn start_key(&self) -> NaiveDateTime {
        match self {
            Event::Date(event) => event.start.and_time(chrono::NaiveTime::MIN),
            Event::DateTime(event) => event.start,
        }
    }

    fn end_key(&self) -> NaiveDateTime {
        match self {
            Event::Date(event) => event.end.and_time(chrono::NaiveTime::MIN),
            Event::DateTime(event) => event.end,
        }
    }

    fn variant_rank(&self) -> u8 {
        match self {
            Event::Date(_) => 0,
            Event::DateTime(_) => 1,
        }
    }

    /// Canonical ordering: earlier start first, then longer first, then by
    /// title. Remaining ties fall back to every other descriptive field, so
    /// only identical events compare equal.
    pub fn compare(&self, other: &Event) -> Ordering {
        self.start_key()
            .cmp(&other.start_key())
            .then_with(|| other.end_key().cmp(&self.end_key()))
            .then_with(|| self.title().cmp(other.title()))
            .then_with(|| self.variant_rank().cmp(&other.variant_rank()))
            .then_with(|| self.details().description.cmp(&other.details().description))
            .then_with(|| self.details().url.cmp(&other.details().url))
            .then_with(|| self.details().image_url.cmp(&other.details().image_url))
            .then_with(|| self.details().categories.cmp(&other.details().categories))
    }

    /// Human-readable date or time range.
    pub fn when_label(&self) -> String {
        match self {
            Event::Date(event) => {
                let last = event.end_date();
                if last == event.start {
                    short_date(event.start)
                } else {
                    format!("{} \u{2013} {}", short_date(event.start), short_date(last))
                }
            }
            Event::DateTime(event) => {
                if event.start.date() == event.end.date() {
                    format!(
                        "{}, {}",
                        short_date(event.start.date()),
                        brief_time_range(event.start.time(), event.end.time())
                    )
                } else {
                    format!(
                        "{} \u{2013} {}",
                        short_datetime(event.start),
                        short_datetime(event.end)
                    )
                }
            }
        }
    }

    /// Plain-text tooltip: title, range and description. Not escaped.
    pub fn title_attr(&self) -> String {
        let mut text = format!("{}\n{}", self.title(), self.when_label());
        if let Some(description) = &self.details().description {
            text.push_str("\n\n");
            text.push_str(description);
        }
        text
    }

    /// HTML headline: the title, prefixed by a `<time>` tag for timed events.
    pub fn headline_html(&self) -> String {
        let title = match &self.details().url {
            Some(url) => format!(
                "<a href=\"{}\">{}</a>",
                html_escape(url),
                html_escape(self.title())
            ),
            None => html_escape(self.title()),
        };

        match self {
            Event::Date(_) => title,
            Event::DateTime(event) => format!(
                "<time datetime=\"{}\">{}</time> {}",
                event.start.format("%Y-%m-%dT%H:%M"),
                brief_time(event.start.time()),
                title
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event(title: &str, start_at: &str, end_at: &str) -> Event {
        Event::from_raw(&RawEvent::new(title, start_at, end_at), &Utc).unwrap()
    }

    #[test]
    fn test_classify_date_event() {
        let retreat = event("Retreat", "2025-03-10", "2025-03-14");

        assert!(retreat.is_all_day());
        assert_eq!(retreat.start_date(), make_date(2025, 3, 10));
        assert_eq!(retreat.end_date(), make_date(2025, 3, 13));
        assert_eq!(retreat.multi_length(), 3);
        assert!(retreat.is_spanning());
    }

    #[test]
    fn test_single_day_date_event_still_spans() {
        let holiday = event("Holiday", "2025-03-10", "2025-03-11");

        assert_eq!(holiday.end_date(), make_date(2025, 3, 10));
        assert_eq!(holiday.multi_length(), 0);
        assert!(holiday.is_spanning());
    }

    #[test]
    fn test_date_event_with_empty_range_is_clamped() {
        let odd = event("Odd", "2025-03-10", "2025-03-10");
        assert_eq!(odd.end_date(), make_date(2025, 3, 10));
        assert_eq!(odd.multi_length(), 0);
    }

    #[test]
    fn test_classify_datetime_event() {
        let meeting = event("Meeting", "2025-03-10T09:00", "2025-03-10T10:30");

        assert!(!meeting.is_all_day());
        assert_eq!(meeting.start_date(), make_date(2025, 3, 10));
        assert_eq!(meeting.end_date(), make_date(2025, 3, 10));
        assert_eq!(meeting.multi_length(), 0);
        assert!(!meeting.is_spanning());
    }

    #[test]
    fn test_malformed_event() {
        let raw = RawEvent::new("Broken", "2025-03-10", "2025-03-11T10:00");
        let err = Event::from_raw(&raw, &Utc).unwrap_err();
        assert!(matches!(err, EventError::MalformedEvent { .. }));

        let raw = RawEvent::new("Broken", "2025-03-10T10:00", "2025-03-11");
        let err = Event::from_raw(&raw, &Utc).unwrap_err();
        assert!(matches!(err, EventError::MalformedEvent { .. }));
    }

    #[test]
    fn test_invalid_timestamp() {
        let raw = RawEvent::new("Broken", "2025-13-10", "2025-03-11");
        let err = Event::from_raw(&raw, &Utc).unwrap_err();
        assert_eq!(
            err,
            EventError::InvalidTimestamp {
                title: "Broken".to_string(),
                value: "2025-13-10".to_string(),
            }
        );
    }

    #[test]
    fn test_noon_rule_overnight_stays_in_start_day() {
        let party = event("Party", "2025-03-10T21:00", "2025-03-11T02:00");

        assert_eq!(party.end_date(), make_date(2025, 3, 11));
        assert_eq!(party.rendered_end_date(), make_date(2025, 3, 10));
        assert_eq!(party.multi_length(), 0);
        assert!(!party.is_spanning());
    }

    #[test]
    fn test_noon_rule_end_exactly_noon_is_previous_day() {
        let shift = event("Shift", "2025-03-10T09:00", "2025-03-12T12:00");
        assert_eq!(shift.rendered_end_date(), make_date(2025, 3, 11));
        assert_eq!(shift.multi_length(), 1);
    }

    #[test]
    fn test_noon_rule_end_after_noon_claims_day() {
        let festival = event("Festival", "2025-03-10T09:00", "2025-03-12T12:01");
        assert_eq!(festival.rendered_end_date(), make_date(2025, 3, 12));
        assert_eq!(festival.multi_length(), 2);
        assert!(festival.is_spanning());
    }

    #[test]
    fn test_compare_orders_by_start_then_longest_then_title() {
        let early = event("Zed", "2025-03-10T08:00", "2025-03-10T09:00");
        let long = event("Long", "2025-03-10T09:00", "2025-03-10T12:00");
        let short_a = event("Alpha", "2025-03-10T09:00", "2025-03-10T10:00");
        let short_b = event("Beta", "2025-03-10T09:00", "2025-03-10T10:00");

        let mut events = vec![
            short_b.clone(),
            long.clone(),
            early.clone(),
            short_a.clone(),
        ];
        events.sort_by(|a, b| a.compare(b));

        assert_eq!(events, vec![early, long, short_a, short_b]);
    }

    #[test]
    fn test_compare_is_antisymmetric_and_reflexive() {
        let a = event("A", "2025-03-10", "2025-03-12");
        let b = event("A", "2025-03-10T00:00", "2025-03-12T00:00");

        assert_eq!(a.compare(&a), Ordering::Equal);
        assert_eq!(a.compare(&b), b.compare(&a).reverse());
        assert_ne!(a.compare(&b), Ordering::Equal);
    }

    #[test]
    fn test_compare_distinguishes_descriptions() {
        let raw = RawEvent::new("Same", "2025-03-10", "2025-03-11");
        let plain = Event::from_raw(&raw, &Utc).unwrap();
        let described = Event::from_raw(&raw.clone().with_description("x"), &Utc).unwrap();

        assert_eq!(plain.compare(&described), Ordering::Less);
        assert_eq!(described.compare(&plain), Ordering::Greater);
    }

    #[test]
    fn test_compare_distinguishes_image_and_categories() {
        let raw = RawEvent::new("Gig", "2025-03-10T20:00", "2025-03-10T23:00");
        let with_image =
            Event::from_raw(&raw.clone().with_image_url("https://example.com/g.png"), &Utc)
                .unwrap();
        let with_category = Event::from_raw(&raw.clone().with_category("Jazz"), &Utc).unwrap();
        let with_two = Event::from_raw(
            &raw.clone().with_category("Jazz").with_category("Live"),
            &Utc,
        )
        .unwrap();

        assert_eq!(with_category.compare(&with_image), Ordering::Less);
        assert_eq!(with_image.compare(&with_category), Ordering::Greater);
        assert_eq!(with_category.compare(&with_two), Ordering::Less);
        assert_eq!(with_two.compare(&with_two.clone()), Ordering::Equal);
    }

    #[test]
    fn test_headline_html() {
        let retreat = event("Rock & Roll", "2025-03-10", "2025-03-14");
        assert_eq!(retreat.headline_html(), "Rock &amp; Roll");

        let meeting = event("Meeting", "2025-03-10T09:00", "2025-03-10T10:30");
        assert_eq!(
            meeting.headline_html(),
            "<time datetime=\"2025-03-10T09:00\">9am</time> Meeting"
        );
    }

    #[test]
    fn test_headline_html_links_url() {
        let raw = RawEvent::new("Show", "2025-03-10", "2025-03-11")
            .with_url("https://example.com/?a=1&b=2");
        let show = Event::from_raw(&raw, &Utc).unwrap();

        assert_eq!(
            show.headline_html(),
            "<a href=\"https://example.com/?a=1&amp;b=2\">Show</a>"
        );
    }

    #[test]
    fn test_title_attr() {
        let meeting = Event::from_raw(
            &RawEvent::new("Meeting", "2025-03-10T09:00", "2025-03-10T10:30")
                .with_description("Room 4"),
            &Utc,
        )
        .unwrap();
        assert_eq!(
            meeting.title_attr(),
            "Meeting\nMon, Mar 10, 9am\u{2013}10:30am\n\nRoom 4"
        );

        let retreat = event("Retreat", "2025-03-10", "2025-03-14");
        assert_eq!(
            retreat.title_attr(),
            "Retreat\nMon, Mar 10 \u{2013} Thu, Mar 13"
        );

        let party = event("Party", "2025-03-10T21:00", "2025-03-11T02:00");
        assert_eq!(
            party.title_attr(),
            "Party\nMon, Mar 10, 9pm \u{2013} Tue, Mar 11, 2am"
        );
    }
}
