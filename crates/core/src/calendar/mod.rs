mod edges;
mod error;
mod event;
mod grid;
mod html;
mod lanes;
mod layout;
mod merge;
mod stack;
mod time;
mod types;

pub use edges::{decompose, Edge, EdgeId};
pub use error::{EventError, LayoutError};
pub use event::{DateEvent, DateTimeEvent, Event, EventDetails};
pub use grid::{YearGrid, DAYS_PER_WEEK};
pub use html::{html_escape, render_layout};
pub use lanes::{allocate, canonical_order, compare_edges, LaneAssignment};
pub use layout::{layout_year, DayCell, Segment, YearLayout};
pub use merge::{merge_calendars, NAME_SEPARATOR};
pub use stack::DayStack;
pub use time::{brief_time, brief_time_range, parse_date, parse_local_datetime};
pub use types::{RawCalendar, RawEvent};
