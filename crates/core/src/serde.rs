//! Serde helper functions for ingested calendar documents.
//!
//! Scraped calendars are noisy: optional fields arrive as empty strings or
//! `null`, and category lists may be missing entirely. These helpers normalize
//! those shapes at deserialization time so the event model never sees them.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize a list of categories, treating `null` as empty and dropping
/// blank entries. Order is preserved.
pub fn deserialize_categories<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let list: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(list
        .unwrap_or_default()
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect())
}

/// Deserialize a timestamp string, trimming surrounding whitespace.
pub fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_categories")]
        categories: Vec<String>,
        #[serde(default, deserialize_with = "deserialize_trimmed")]
        stamp: String,
    }

    #[test]
    fn test_deserialize_optional_string_blank_is_none() {
        for json in [
            r#"{"string_field": ""}"#,
            r#"{"string_field": "   "}"#,
            r#"{"string_field": null}"#,
            "{}",
        ] {
            let result: TestStruct = serde_json::from_str(json).unwrap();
            assert_eq!(result.string_field, None, "{json}");
        }
    }

    #[test]
    fn test_deserialize_optional_string_keeps_value() {
        let result: TestStruct = serde_json::from_str(r#"{"string_field": "Jazz"}"#).unwrap();
        assert_eq!(result.string_field, Some("Jazz".to_string()));
    }

    #[test]
    fn test_deserialize_categories_missing_and_null() {
        let missing: TestStruct = serde_json::from_str("{}").unwrap();
        assert!(missing.categories.is_empty());

        let null: TestStruct = serde_json::from_str(r#"{"categories": null}"#).unwrap();
        assert!(null.categories.is_empty());
    }

    #[test]
    fn test_deserialize_categories_drops_blank_entries() {
        let json = r#"{"categories": ["Music", " ", "Film "]}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.categories, vec!["Music", "Film"]);
    }

    #[test]
    fn test_deserialize_trimmed() {
        let json = r#"{"stamp": " 2025-03-10\n"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.stamp, "2025-03-10");
    }
}
