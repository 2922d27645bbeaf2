//! Timestamp parsing and the brief English time formats used on the grid.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};

/// Date-only spellings: ISO extended and iCalendar basic form.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// Timestamps carrying an explicit UTC offset.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y%m%dT%H%M%S%z",
];

/// Floating timestamps without an offset (wall-clock in the render zone).
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y%m%dT%H%M%S",
    "%Y%m%dT%H%M",
];

/// Returns true if the raw value carries a time of day.
pub fn has_time_component(value: &str) -> bool {
    value.contains('T')
}

/// Parses a date-only value.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Parses a timestamp and converts it to wall-clock time in `tz`.
///
/// Values with a `Z` suffix or an explicit offset are instants and get
/// converted. Values without either are taken as already local.
pub fn parse_local_datetime<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<NaiveDateTime> {
    if let Some(utc) = value.strip_suffix('Z').or_else(|| value.strip_suffix('z')) {
        let naive = parse_naive_datetime(utc)?;
        return Some(
            Utc.from_utc_datetime(&naive)
                .with_timezone(tz)
                .naive_local(),
        );
    }

    if let Some(instant) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(value, format).ok())
    {
        return Some(instant.with_timezone(tz).naive_local());
    }

    parse_naive_datetime(value)
}

fn parse_naive_datetime(value: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Formats a time of day the short way: `9am`, `10:30am`, `noon`.
pub fn brief_time(time: NaiveTime) -> String {
    if time.hour() == 12 && time.minute() == 0 {
        return "noon".to_string();
    }

    let (pm, hour) = time.hour12();
    let suffix = if pm { "pm" } else { "am" };

    if time.minute() == 0 {
        format!("{hour}{suffix}")
    } else {
        format!("{hour}:{:02}{suffix}", time.minute())
    }
}

/// Formats a same-day time range: `9am–10:30am`.
pub fn brief_time_range(start: NaiveTime, end: NaiveTime) -> String {
    format!("{}\u{2013}{}", brief_time(start), brief_time(end))
}

/// Formats a date as `Mon, Mar 10`.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Formats a date and time as `Mon, Mar 10, 9pm`.
pub fn short_datetime(datetime: NaiveDateTime) -> String {
    format!(
        "{}, {}",
        short_date(datetime.date()),
        brief_time(datetime.time())
    )
}
