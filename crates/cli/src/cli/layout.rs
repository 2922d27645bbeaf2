//! Layout command.

use std::path::PathBuf;

use chrono::FixedOffset;
use clap::Parser;

use super::OutputFormat;
use crate::config::parse_utc_offset;

/// Print the computed layout without rendering HTML.
#[derive(Debug, Parser)]
pub struct LayoutCommand {
    /// Calendar JSON files. Several files are merged first.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Year to lay out [default: $YEARGRID_YEAR or the current year].
    #[arg(long, short)]
    pub year: Option<i32>,

    /// Output format.
    #[arg(long, short, default_value = "pretty")]
    pub format: OutputFormat,

    /// Interpret times at this offset (e.g. -05:00) instead of local time.
    #[arg(long, allow_hyphen_values = true, value_parser = parse_utc_offset)]
    pub utc_offset: Option<FixedOffset>,
}
