//! Year-at-a-glance calendar layout - pure logic, no I/O.
//!
//! This crate provides:
//! - Classification of raw event records into all-day and timed events
//! - The week-row grid coordinate mapping for a year
//! - Per-day stacking of timed events and lane allocation for spanning events
//! - The HTML fragment handed to the page template
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use yeargrid_core::calendar::{RawCalendar, RawEvent};
//! use yeargrid_core::render_calendar;
//!
//! let calendar = RawCalendar::new("Team").with_events(vec![
//!     RawEvent::new("Offsite", "2025-03-10", "2025-03-14"),
//!     RawEvent::new("Standup", "2025-03-10T09:00", "2025-03-10T09:15"),
//! ]);
//!
//! let rendered = render_calendar(&calendar, 2025, &Utc).unwrap();
//!
//! assert_eq!(rendered.name, "Team");
//! assert!(rendered.content.contains("Offsite"));
//! ```

pub mod calendar;
mod render;
pub mod serde;

pub use render::{classify_events, render_calendar, render_events, RenderError, RenderedCalendar};
