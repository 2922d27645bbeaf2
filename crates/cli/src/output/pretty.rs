//! Pretty output formatting.

use yeargrid_core::calendar::{DayCell, Segment, YearLayout, DAYS_PER_WEEK};

/// Format a segment for display.
pub fn format_segment(layout: &YearLayout<'_>, segment: &Segment<'_>) -> String {
    let first = day_at(layout, segment.row, segment.col_start);
    let last = day_at(layout, segment.row, segment.col_end - 1);
    let mut output = format!(
        "week {:>2}  {} - {}  lane {}  {}",
        segment.row + 1,
        first,
        last,
        segment.lane,
        segment.event.title()
    );
    if segment.continues_before {
        output.push_str("  (continued)");
    }
    if segment.continues_after {
        output.push_str("  (continues)");
    }
    output
}

/// Format a day and its stacked events for display.
pub fn format_day(day: &DayCell<'_>) -> String {
    let mut output = format!("{}", day.date.format("%a %b %-d"));
    if day.reserved_lanes > 0 {
        output.push_str(&format!("  [{} lanes reserved]", day.reserved_lanes));
    }
    for event in &day.events {
        output.push_str(&format!("\n    {}  {}", event.when_label(), event.title()));
    }
    output
}

/// Format a whole layout for display.
pub fn format_layout(layout: &YearLayout<'_>) -> String {
    let mut output = format!(
        "YEAR {} ({} weeks, {} lanes)\n",
        layout.year, layout.rows, layout.lane_count
    );
    output.push_str(&"-".repeat(40));

    output.push_str(&format!("\nSPANNING ({})", layout.segments.len()));
    for segment in &layout.segments {
        output.push_str(&format!("\n  {}", format_segment(layout, segment)));
    }

    let busy: Vec<&DayCell<'_>> = layout
        .days
        .iter()
        .filter(|day| !day.events.is_empty())
        .collect();
    output.push_str(&format!("\nDAYS ({})", busy.len()));
    for day in busy {
        output.push_str(&format!("\n  {}", format_day(day)));
    }
    output.push('\n');
    output
}

fn day_at(layout: &YearLayout<'_>, row: i64, col: i64) -> String {
    usize::try_from(row * DAYS_PER_WEEK + col)
        .ok()
        .and_then(|index| layout.days.get(index))
        .map_or_else(|| "?".to_string(), |day| day.date.format("%a %b %-d").to_string())
}
