//! Calendar file loading.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use yeargrid_core::calendar::RawCalendar;

/// Reads one calendar document.
pub fn load_calendar(path: &Path) -> Result<RawCalendar> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let calendar = RawCalendar::from_json(&json)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        name = %calendar.name,
        events = calendar.events.len(),
        "Loaded calendar"
    );
    Ok(calendar)
}

/// Reads calendar documents in the given order.
pub fn load_calendars<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<RawCalendar>> {
    paths.iter().map(|path| load_calendar(path.as_ref())).collect()
}
