//! Merge command.

use std::path::PathBuf;

use clap::Parser;

/// Combine several calendar files into one.
#[derive(Debug, Parser)]
pub struct MergeCommand {
    /// Calendar JSON files, in the order their events are listed.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Name of the combined calendar [default: the source names joined].
    #[arg(long, short)]
    pub name: Option<String>,

    /// Write the merged calendar here instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
