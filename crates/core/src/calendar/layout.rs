//! Year layout: day cells with their stacked events and spanning segments
//! with their lanes.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::edges::{decompose, Edge};
use super::error::LayoutError;
use super::event::Event;
use super::grid::{YearGrid, DAYS_PER_WEEK};
use super::lanes::allocate;
use super::stack::DayStack;

/// One cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell<'a> {
    pub ord: i64,
    pub date: NaiveDate,
    pub row: i64,
    pub col: i64,
    pub label: String,
    /// False for the padding days of the first and last rows.
    pub in_year: bool,
    /// Spanning lanes drawn over this cell.
    pub reserved_lanes: usize,
    /// Non-spanning events starting this day, earliest first.
    pub events: Vec<&'a Event>,
}

/// One row's piece of a spanning event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub event: &'a Event,
    pub row: i64,
    /// First column covered.
    pub col_start: i64,
    /// One past the last column covered.
    pub col_end: i64,
    pub lane: usize,
    /// The event started in an earlier row.
    pub continues_before: bool,
    /// The event goes on in a later row.
    pub continues_after: bool,
}

impl Segment<'_> {
    /// Number of days covered.
    pub fn len(&self) -> i64 {
        self.col_end - self.col_start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Placement of a whole year of events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearLayout<'a> {
    pub year: i32,
    pub rows: i64,
    /// Maximum number of spanning lanes used anywhere.
    pub lane_count: usize,
    pub days: Vec<DayCell<'a>>,
    /// Ordered by row, then start column, then lane.
    pub segments: Vec<Segment<'a>>,
}

/// Lays out `events` on `grid`.
///
/// Fails if any event touches a day outside the grid. Nothing is clipped.
pub fn layout_year<'a>(events: &'a [Event], grid: &YearGrid) -> Result<YearLayout<'a>, LayoutError> {
    for event in events {
        check_in_grid(event, event.start_date(), grid)?;
        check_in_grid(event, event.rendered_end_date(), grid)?;
    }

    let (spanning, stacked): (Vec<&Event>, Vec<&Event>) =
        events.iter().partition(|event| event.is_spanning());

    let mut edges = decompose(&spanning, grid);
    let lanes = allocate(&mut edges, &spanning);

    let mut stack = DayStack::new(stacked);
    let days = grid
        .dates()
        .map(|(ord, date)| DayCell {
            ord,
            date,
            row: YearGrid::row(ord),
            col: YearGrid::col(ord),
            label: day_label(ord, date),
            in_year: date.year() == grid.year(),
            reserved_lanes: lanes.reserved_at(ord),
            events: stack.pop_day(date).to_vec(),
        })
        .collect();
    stack.finish()?;

    let mut segments: Vec<Segment<'a>> = edges
        .iter()
        .filter_map(|close| segment(&edges, close, &spanning))
        .collect();
    segments.sort_by_key(|segment| (segment.row, segment.col_start, segment.lane));

    tracing::debug!(
        year = grid.year(),
        stacked = events.len() - spanning.len(),
        spanning = spanning.len(),
        segments = segments.len(),
        lanes = lanes.lane_count,
        "Laid out year"
    );

    Ok(YearLayout {
        year: grid.year(),
        rows: grid.rows(),
        lane_count: lanes.lane_count,
        days,
        segments,
    })
}

fn check_in_grid(event: &Event, date: NaiveDate, grid: &YearGrid) -> Result<(), LayoutError> {
    if grid.contains(date) {
        Ok(())
    } else {
        Err(LayoutError::OutOfRange {
            title: event.title().to_string(),
            date,
        })
    }
}

/// Builds the segment closed by `close`, or None for open edges.
fn segment<'a>(edges: &[Edge], close: &Edge, events: &[&'a Event]) -> Option<Segment<'a>> {
    let open = &edges[close.opened_by?];
    let lane = open
        .lane
        .unwrap_or_else(|| panic!("segment opened at {} has no lane", open.position));

    Some(Segment {
        event: events[close.event],
        row: YearGrid::row(open.position),
        col_start: YearGrid::col(open.position),
        col_end: YearGrid::col(close.position - 1) + 1,
        lane,
        continues_before: !open.definite,
        continues_after: !close.definite,
    })
}

/// `Mar 1` style labels on the first row and on the first of each month,
/// the bare day number elsewhere.
fn day_label(ord: i64, date: NaiveDate) -> String {
    if ord < DAYS_PER_WEEK || date.day() == 1 {
        date.format("%b %-d").to_string()
    } else {
        date.day().to_string()
    }
}
