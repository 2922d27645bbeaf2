//! Output formatting functions.

pub mod json;
pub mod pretty;

use yeargrid_core::calendar::YearLayout;

use crate::cli::OutputFormat;

/// Format a layout for output.
pub fn format_layout(layout: &YearLayout<'_>, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => json::format_json(layout),
        OutputFormat::Pretty => Ok(pretty::format_layout(layout)),
    }
}
