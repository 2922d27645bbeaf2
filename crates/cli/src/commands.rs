//! Command execution.

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use chrono::{Datelike, Local, TimeZone};
use yeargrid_core::calendar::{layout_year, merge_calendars, LayoutError, RawCalendar, YearGrid};
use yeargrid_core::{classify_events, render_calendar};

use crate::cli::{
    layout::LayoutCommand, merge::MergeCommand, render::RenderCommand, Cli, Commands,
    OutputFormat,
};
use crate::config::Config;
use crate::input::load_calendars;
use crate::output::format_layout;
use crate::template::Template;

/// Runs the parsed command line.
pub fn run(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Render(cmd) => {
            let page = render(&cmd, config)?;
            emit(cmd.output.as_deref(), &page)
        }
        Commands::Merge(cmd) => {
            let document = merge(&cmd)?;
            emit(cmd.output.as_deref(), &document)
        }
        Commands::Layout(cmd) => {
            let report = layout(&cmd, config)?;
            emit(None, &report)
        }
    }
}

/// Builds the HTML page for the `render` command.
pub fn render(cmd: &RenderCommand, config: &Config) -> Result<String> {
    let template_path = cmd.template.as_deref().or(config.template.as_deref());
    let template = Template::load_or_default(template_path)?;

    let calendar = load_merged(&cmd.files, cmd.name.as_deref())?;
    let year = resolve_year(cmd.year, config);

    let rendered = match cmd.utc_offset.or(config.utc_offset) {
        Some(offset) => render_calendar(&calendar, year, &offset),
        None => render_calendar(&calendar, year, &Local),
    }
    .with_context(|| format!("Failed to render {year}"))?;

    tracing::info!(
        calendar = %calendar.name,
        year,
        events = calendar.events.len(),
        "Rendered page"
    );
    Ok(template.render(&rendered))
}

/// Builds the merged calendar document for the `merge` command.
pub fn merge(cmd: &MergeCommand) -> Result<String> {
    let calendar = load_merged(&cmd.files, cmd.name.as_deref())?;
    let mut document = calendar.to_json_pretty()?;
    document.push('\n');

    tracing::info!(
        calendar = %calendar.name,
        sources = cmd.files.len(),
        events = calendar.events.len(),
        "Merged calendars"
    );
    Ok(document)
}

/// Builds the layout report for the `layout` command.
pub fn layout(cmd: &LayoutCommand, config: &Config) -> Result<String> {
    let calendar = load_merged(&cmd.files, None)?;
    let year = resolve_year(cmd.year, config);

    match cmd.utc_offset.or(config.utc_offset) {
        Some(offset) => layout_report(&calendar, year, &offset, cmd.format),
        None => layout_report(&calendar, year, &Local, cmd.format),
    }
}

fn layout_report<Tz: TimeZone>(
    calendar: &RawCalendar,
    year: i32,
    tz: &Tz,
    format: OutputFormat,
) -> Result<String> {
    let grid = YearGrid::new(year).ok_or(LayoutError::YearOutOfRange(year))?;
    let events = classify_events(&calendar.events, tz)?;
    let layout = layout_year(&events, &grid)?;
    Ok(format_layout(&layout, format)?)
}

fn load_merged<P: AsRef<Path>>(files: &[P], name: Option<&str>) -> Result<RawCalendar> {
    let calendars = load_calendars(files)?;
    Ok(merge_calendars(calendars, name))
}

/// Flag, then `YEARGRID_YEAR`, then the current local year.
fn resolve_year(flag: Option<i32>, config: &Config) -> i32 {
    flag.or(config.year).unwrap_or_else(|| Local::now().year())
}

fn emit(output: Option<&Path>, document: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = document.len(), "Wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
