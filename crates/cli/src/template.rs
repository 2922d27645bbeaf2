//! Page template with `{{name}}` and `{{content}}` placeholders.

use std::{fs, path::Path, path::PathBuf};

use thiserror::Error;
use yeargrid_core::RenderedCalendar;

/// Template compiled into the binary.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/calendar.html");

const PLACEHOLDERS: [&str; 2] = ["name", "content"];

/// Template loading errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template has no {{{{{0}}}}} placeholder")]
    MissingPlaceholder(&'static str),

    #[error("Failed to read template {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A validated page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Validates `source`: every placeholder must appear at least once.
    pub fn new(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();
        for key in PLACEHOLDERS {
            if !source.contains(&format!("{{{{{key}}}}}")) {
                return Err(TemplateError::MissingPlaceholder(key));
            }
        }
        Ok(Self { source })
    }

    /// Reads and validates a template file.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(source)
    }

    /// The built-in template, or the file at `path` when given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, TemplateError> {
        match path {
            Some(path) => Self::load(path),
            None => Self::new(DEFAULT_TEMPLATE),
        }
    }

    /// Fills in the placeholders in one pass.
    ///
    /// Substituted text is never scanned again, so a calendar name that
    /// happens to contain `{{content}}` stays literal. Unknown `{{...}}`
    /// sequences are copied through.
    pub fn render(&self, rendered: &RenderedCalendar) -> String {
        let substitutions = rendered.substitutions();
        let mut out = String::with_capacity(self.source.len() + rendered.content.len());
        let mut rest = self.source.as_str();

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let matched = after.find("}}").and_then(|end| {
                substitutions
                    .iter()
                    .find(|(key, _)| *key == &after[..end])
                    .map(|(_, value)| (end, *value))
            });
            match matched {
                Some((end, value)) => {
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    out.push('{');
                    rest = &rest[start + 1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}
