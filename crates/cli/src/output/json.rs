//! JSON output formatting.

/// Format a value as indented JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
