//! Render entry point: raw records in, template substitutions out.

use chrono::TimeZone;
use thiserror::Error;

use crate::calendar::{
    html_escape, layout_year, render_layout, Event, EventError, LayoutError, RawCalendar,
    RawEvent, YearGrid,
};

/// Errors that abort a render pass. No partial output is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error(transparent)]
    Event(#[from] EventError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// The two values substituted into the page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCalendar {
    /// Display name, HTML-escaped.
    pub name: String,
    /// The year grid fragment.
    pub content: String,
}

impl RenderedCalendar {
    /// Named substitutions in template order.
    pub fn substitutions(&self) -> [(&'static str, &str); 2] {
        [("name", &self.name), ("content", &self.content)]
    }
}

/// Classifies every record, failing on the first malformed one.
pub fn classify_events<Tz: TimeZone>(raw: &[RawEvent], tz: &Tz) -> Result<Vec<Event>, EventError> {
    raw.iter().map(|event| Event::from_raw(event, tz)).collect()
}

/// Renders one year of `events` under `name`, with timestamps shown in `tz`.
pub fn render_events<Tz: TimeZone>(
    name: &str,
    events: &[RawEvent],
    year: i32,
    tz: &Tz,
) -> Result<RenderedCalendar, RenderError> {
    let grid = YearGrid::new(year).ok_or(LayoutError::YearOutOfRange(year))?;
    let events = classify_events(events, tz)?;
    let layout = layout_year(&events, &grid)?;

    tracing::debug!(
        calendar = name,
        year,
        events = events.len(),
        lanes = layout.lane_count,
        "Rendered calendar"
    );

    Ok(RenderedCalendar {
        name: html_escape(name),
        content: render_layout(&layout),
    })
}

/// Renders one year of a calendar document.
pub fn render_calendar<Tz: TimeZone>(
    calendar: &RawCalendar,
    year: i32,
    tz: &Tz,
) -> Result<RenderedCalendar, RenderError> {
    render_events(&calendar.name, &calendar.events, year, tz)
}
