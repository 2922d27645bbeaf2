//! Render command.

use std::path::PathBuf;

use chrono::FixedOffset;
use clap::Parser;

use crate::config::parse_utc_offset;

/// Render one year of events as an HTML page.
#[derive(Debug, Parser)]
pub struct RenderCommand {
    /// Calendar JSON files. Several files are merged before rendering.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Year to render [default: $YEARGRID_YEAR or the current year].
    #[arg(long, short)]
    pub year: Option<i32>,

    /// Calendar name shown on the page [default: the calendar names joined].
    #[arg(long, short)]
    pub name: Option<String>,

    /// Page template with {{name}} and {{content}} placeholders.
    #[arg(long, short)]
    pub template: Option<PathBuf>,

    /// Write the page here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Show times at this offset (e.g. -05:00) instead of local time.
    #[arg(long, allow_hyphen_values = true, value_parser = parse_utc_offset)]
    pub utc_offset: Option<FixedOffset>,
}
