//! Per-day stacking of timed events that do not span cells.

use chrono::NaiveDate;

use super::error::LayoutError;
use super::event::Event;

/// Events sorted by [`Event::compare`] and consumed front to back, one grid
/// day at a time.
#[derive(Debug)]
pub struct DayStack<'a> {
    events: Vec<&'a Event>,
    cursor: usize,
}

impl<'a> DayStack<'a> {
    /// Builds the stack from non-spanning events.
    pub fn new(events: impl IntoIterator<Item = &'a Event>) -> Self {
        let mut events: Vec<&'a Event> = events.into_iter().collect();
        events.sort_by(|a, b| a.compare(b));
        Self { events, cursor: 0 }
    }

    /// Takes every event at the head of the stack that starts on `date`.
    ///
    /// Days must be visited in ascending order; an event dated before the
    /// current day stays at the head and is reported by [`DayStack::finish`].
    pub fn pop_day(&mut self, date: NaiveDate) -> &[&'a Event] {
        let begin = self.cursor;
        while self
            .events
            .get(self.cursor)
            .is_some_and(|event| event.start_date() == date)
        {
            self.cursor += 1;
        }
        &self.events[begin..self.cursor]
    }

    /// Number of events not yet taken.
    pub fn remaining(&self) -> usize {
        self.events.len() - self.cursor
    }

    /// Checks the stack is drained. Leftovers are events dated outside the
    /// visited days.
    pub fn finish(self) -> Result<(), LayoutError> {
        match self.events.get(self.cursor) {
            Some(event) => Err(LayoutError::OutOfRange {
                title: event.title().to_string(),
                date: event.start_date(),
            }),
            None => Ok(()),
        }
    }
}
