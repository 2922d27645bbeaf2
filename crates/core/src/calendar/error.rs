use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while classifying raw event records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error(
        "Malformed event {title:?}: startAt {start_at:?} and endAt {end_at:?} must both be dates or both be timestamps"
    )]
    MalformedEvent {
        title: String,
        start_at: String,
        end_at: String,
    },
    #[error("Invalid timestamp {value:?} in event {title:?}")]
    InvalidTimestamp { title: String, value: String },
}

/// Errors raised while placing events on the year grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Event {title:?} has date {date} outside the rendered grid")]
    OutOfRange { title: String, date: NaiveDate },
    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),
}
