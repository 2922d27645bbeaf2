//! Decomposition of spanning events into per-row segment edges.
//!
//! Every spanning event becomes a chain of open/close edges, one pair per
//! grid row it touches. Edges live in a flat arena and refer to each other
//! and to their event by index.

use super::event::Event;
use super::grid::{YearGrid, DAYS_PER_WEEK};

/// Index of an edge in the arena returned by [`decompose`].
pub type EdgeId = usize;

/// One boundary of one row segment of a spanning event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Grid ordinal. For closes this is the day after the segment's last day.
    pub position: i64,
    /// Index of the owning event in the slice given to [`decompose`].
    pub event: usize,
    /// For close edges, the open edge that began this segment.
    pub opened_by: Option<EdgeId>,
    /// False when the boundary is a week break rather than the event's own
    /// start or end.
    pub definite: bool,
    /// Lane assigned by the allocator; only set on open edges.
    pub lane: Option<usize>,
}

impl Edge {
    fn open(position: i64, event: usize, definite: bool) -> Self {
        Self {
            position,
            event,
            opened_by: None,
            definite,
            lane: None,
        }
    }

    fn close(position: i64, event: usize, opened_by: EdgeId, definite: bool) -> Self {
        Self {
            position,
            event,
            opened_by: Some(opened_by),
            definite,
            lane: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.opened_by.is_none()
    }

    pub fn is_close(&self) -> bool {
        self.opened_by.is_some()
    }
}

/// Splits each spanning event into row segments.
///
/// The arena holds, per event, a definite open at its start ordinal, an
/// indefinite close/open pair at every week boundary strictly inside the
/// event, and a definite close one past its last day.
pub fn decompose(events: &[&Event], grid: &YearGrid) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(events.len() * 2);

    for (index, event) in events.iter().enumerate() {
        let open = grid.ord(event.start_date());
        let close = open + event.multi_length() + 1;

        edges.push(Edge::open(open, index, true));
        let mut current = edges.len() - 1;

        let mut boundary = (YearGrid::row(open) + 1) * DAYS_PER_WEEK;
        while boundary < close {
            edges.push(Edge::close(boundary, index, current, false));
            edges.push(Edge::open(boundary, index, false));
            current = edges.len() - 1;
            boundary += DAYS_PER_WEEK;
        }

        edges.push(Edge::close(close, index, current, true));
    }

    edges
}
