//! CLI command definitions.

pub mod layout;
pub mod merge;
pub mod render;

use clap::{Parser, Subcommand, ValueEnum};

/// Render calendar event files as a year-at-a-glance HTML page.
#[derive(Debug, Parser)]
#[command(name = "yeargrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only log warnings and errors.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable summary.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render one year of events as an HTML page.
    Render(render::RenderCommand),
    /// Combine several calendar files into one.
    Merge(merge::MergeCommand),
    /// Print the computed layout without rendering HTML.
    Layout(layout::LayoutCommand),
}
