use serde::{Deserialize, Serialize};

use crate::serde::{deserialize_categories, deserialize_optional_string, deserialize_trimmed};

/// A normalized event record as produced by the ingestion step.
///
/// `start_at` and `end_at` are either both ISO dates (all-day, exclusive end)
/// or both ISO timestamps. See [`crate::calendar::Event::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub title: String,
    #[serde(deserialize_with = "deserialize_trimmed")]
    pub start_at: String,
    #[serde(deserialize_with = "deserialize_trimmed")]
    pub end_at: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub url: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub image_url: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "deserialize_categories"
    )]
    pub categories: Vec<String>,
}

impl RawEvent {
    /// Creates a record with the required fields only.
    pub fn new(
        title: impl Into<String>,
        start_at: impl Into<String>,
        end_at: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            start_at: start_at.into(),
            end_at: end_at.into(),
            description: None,
            url: None,
            image_url: None,
            categories: Vec::new(),
        }
    }

    /// Sets the description for this record.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the link target for this record.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the image for this record.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Appends a category to this record.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }
}

/// A named list of raw events, the document format exchanged between the
/// ingestion, merge and render steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCalendar {
    pub name: String,
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

impl RawCalendar {
    /// Creates an empty calendar with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
        }
    }

    /// Replaces the event list.
    pub fn with_events(mut self, events: Vec<RawEvent>) -> Self {
        self.events = events;
        self
    }

    /// Parses a calendar document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the calendar as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_event_builder() {
        let event = RawEvent::new("Concert", "2025-03-10T20:00", "2025-03-10T22:00")
            .with_description("Live music")
            .with_url("https://example.com/concert")
            .with_image_url("https://example.com/concert.jpg")
            .with_category("Music");

        assert_eq!(event.title, "Concert");
        assert_eq!(event.description, Some("Live music".to_string()));
        assert_eq!(event.url, Some("https://example.com/concert".to_string()));
        assert_eq!(
            event.image_url,
            Some("https://example.com/concert.jpg".to_string())
        );
        assert_eq!(event.categories, vec!["Music"]);
    }

    #[test]
    fn test_raw_calendar_from_json() {
        let json = r#"{
            "name": "Cinema",
            "events": [
                {
                    "title": "Matinee",
                    "startAt": "2025-03-10T14:00:00Z",
                    "endAt": "2025-03-10T16:00:00Z",
                    "description": "",
                    "imageUrl": "https://example.com/poster.jpg",
                    "categories": ["Film"]
                }
            ]
        }"#;

        let calendar = RawCalendar::from_json(json).unwrap();

        assert_eq!(calendar.name, "Cinema");
        assert_eq!(calendar.events.len(), 1);
        let event = &calendar.events[0];
        assert_eq!(event.start_at, "2025-03-10T14:00:00Z");
        assert_eq!(event.description, None);
        assert_eq!(
            event.image_url,
            Some("https://example.com/poster.jpg".to_string())
        );
        assert_eq!(event.categories, vec!["Film"]);
    }

    #[test]
    fn test_raw_calendar_missing_events_is_empty() {
        let calendar = RawCalendar::from_json(r#"{"name": "Empty"}"#).unwrap();
        assert!(calendar.events.is_empty());
    }

    #[test]
    fn test_raw_calendar_requires_title() {
        let json = r#"{"name": "X", "events": [{"startAt": "2025-03-10", "endAt": "2025-03-11"}]}"#;
        assert!(RawCalendar::from_json(json).is_err());
    }

    #[test]
    fn test_raw_calendar_json_uses_camel_case() {
        let calendar = RawCalendar::new("Gallery").with_events(vec![RawEvent::new(
            "Opening",
            "2025-05-01",
            "2025-05-02",
        )
        .with_image_url("https://example.com/a.png")]);

        let json = calendar.to_json_pretty().unwrap();

        assert!(json.contains("\"startAt\": \"2025-05-01\""));
        assert!(json.contains("\"imageUrl\""));
        assert!(!json.contains("description"));
        assert_eq!(RawCalendar::from_json(&json).unwrap(), calendar);
    }
}
