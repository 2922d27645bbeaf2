//! HTML fragment for a laid-out year.
//!
//! The fragment is one `.year` CSS grid, seven columns wide. Day cells and
//! spanning segments are both placed explicitly with `grid-row` and
//! `grid-column`, so segments overlay the cells of their row. Each segment
//! carries its lane as `--lane`; each cell reserves `--lanes` worth of space
//! before its own events.

use super::event::Event;
use super::layout::{DayCell, Segment, YearLayout};

/// Escapes text for use in HTML content and quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders the whole layout.
pub fn render_layout(layout: &YearLayout<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"year\" data-year=\"{}\" style=\"--rows: {}; --max-lanes: {}\">\n",
        layout.year, layout.rows, layout.lane_count
    ));
    for day in &layout.days {
        render_day(&mut out, day);
    }
    for segment in &layout.segments {
        render_segment(&mut out, segment);
    }
    out.push_str("</div>\n");
    out
}

fn render_day(out: &mut String, day: &DayCell<'_>) {
    let class = if day.in_year { "day" } else { "day other-year" };
    out.push_str(&format!(
        "<div class=\"{class}\" style=\"grid-row: {}; grid-column: {}\">\n",
        day.row + 1,
        day.col + 1
    ));
    out.push_str(&format!(
        "<time datetime=\"{}\">{}</time>\n",
        day.date.format("%Y-%m-%d"),
        day.label
    ));
    if day.reserved_lanes > 0 {
        out.push_str(&format!(
            "<div class=\"lanes\" style=\"--lanes: {}\"></div>\n",
            day.reserved_lanes
        ));
    }
    for event in &day.events {
        render_event(out, event, "event", None);
    }
    out.push_str("</div>\n");
}

fn render_segment(out: &mut String, segment: &Segment<'_>) {
    let mut class = String::from("multi");
    if segment.continues_before {
        class.push_str(" continues-before");
    }
    if segment.continues_after {
        class.push_str(" continues-after");
    }
    let style = format!(
        "grid-row: {}; grid-column: {} / {}; --lane: {}",
        segment.row + 1,
        segment.col_start + 1,
        segment.col_end + 1,
        segment.lane
    );
    render_event(out, segment.event, &class, Some(&style));
}

fn render_event(out: &mut String, event: &Event, class: &str, style: Option<&str>) {
    let details = event.details();
    out.push_str(&format!(
        "<div class=\"{class}\" title=\"{}\"",
        html_escape(&event.title_attr())
    ));
    if let Some(style) = style {
        out.push_str(&format!(" style=\"{style}\""));
    }
    if !details.categories.is_empty() {
        out.push_str(&format!(
            " data-categories=\"{}\"",
            html_escape(&details.categories.join(","))
        ));
    }
    out.push('>');
    if let Some(image_url) = &details.image_url {
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"\" loading=\"lazy\">",
            html_escape(image_url)
        ));
    }
    out.push_str(&event.headline_html());
    out.push_str("</div>\n");
}
