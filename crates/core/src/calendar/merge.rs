//! Union of several calendars into one.
//!
//! Event lists are concatenated in input order, with no de-duplication: two
//! sources listing the same event produce two entries.
//!
//! This is part of the Functional Core - all functions are pure with no side effects.

use super::types::RawCalendar;

/// Joins source names when no explicit name is given.
pub const NAME_SEPARATOR: &str = " + ";

/// Merges calendars into a single calendar.
///
/// # Arguments
///
/// * `calendars` - The source calendars, in the order their events should be listed
/// * `name` - The combined name; defaults to the source names joined with [`NAME_SEPARATOR`]
///
/// # Examples
///
/// ```
/// use yeargrid_core::calendar::{merge_calendars, RawCalendar, RawEvent};
///
/// let music = RawCalendar::new("Music")
///     .with_events(vec![RawEvent::new("Gig", "2025-03-10T20:00", "2025-03-10T23:00")]);
/// let film = RawCalendar::new("Film")
///     .with_events(vec![RawEvent::new("Matinee", "2025-03-11T14:00", "2025-03-11T16:00")]);
///
/// let merged = merge_calendars(vec![music, film], None);
///
/// assert_eq!(merged.name, "Music + Film");
/// assert_eq!(merged.events.len(), 2);
/// ```
pub fn merge_calendars(calendars: Vec<RawCalendar>, name: Option<&str>) -> RawCalendar {
    let name = match name {
        Some(name) => name.to_string(),
        None => calendars
            .iter()
            .map(|calendar| calendar.name.as_str())
            .filter(|name| !name.trim().is_empty())
            .collect::<Vec<_>>()
            .join(NAME_SEPARATOR),
    };

    let events = calendars
        .into_iter()
        .flat_map(|calendar| calendar.events)
        .collect();

    RawCalendar { name, events }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::RawEvent;

    fn calendar(name: &str, titles: &[&str]) -> RawCalendar {
        RawCalendar::new(name).with_events(
            titles
                .iter()
                .map(|title| RawEvent::new(*title, "2025-03-10", "2025-03-11"))
                .collect(),
        )
    }

    #[test]
    fn test_merge_keeps_input_order() {
        let merged = merge_calendars(
            vec![calendar("A", &["a1", "a2"]), calendar("B", &["b1"])],
            None,
        );

        let titles: Vec<_> = merged.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["a1", "a2", "b1"]);
        assert_eq!(merged.name, "A + B");
    }

    #[test]
    fn test_merge_explicit_name() {
        let merged = merge_calendars(vec![calendar("A", &[]), calendar("B", &[])], Some("All"));
        assert_eq!(merged.name, "All");
    }

    #[test]
    fn test_merge_skips_blank_names() {
        let merged = merge_calendars(vec![calendar("", &["x"]), calendar("B", &[])], None);
        assert_eq!(merged.name, "B");
        assert_eq!(merged.events.len(), 1);
    }

    #[test]
    fn test_merge_single_calendar_is_identity() {
        let source = calendar("Solo", &["one", "two"]);
        let merged = merge_calendars(vec![source.clone()], None);
        assert_eq!(merged, source);
    }

    #[test]
    fn test_merge_nothing() {
        let merged = merge_calendars(Vec::new(), None);
        assert_eq!(merged, RawCalendar::default());
    }

    #[test]
    fn test_merge_keeps_duplicates() {
        let merged = merge_calendars(vec![calendar("A", &["x"]), calendar("B", &["x"])], None);
        assert_eq!(merged.events.len(), 2);
    }
}
