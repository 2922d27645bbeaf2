use std::{env, path::PathBuf};

use chrono::FixedOffset;
use thiserror::Error;

/// Errors in configuration values, from flags or the environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid UTC offset '{0}', expected +HH:MM, -HH:MM or Z")]
    InvalidOffset(String),

    #[error("Invalid {key} '{value}'")]
    InvalidVar { key: &'static str, value: String },
}

/// Defaults loaded from environment variables. Command-line flags win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Year to render when `--year` is not given.
    pub year: Option<i32>,
    /// Template path when `--template` is not given.
    pub template: Option<PathBuf>,
    /// Display offset when `--utc-offset` is not given.
    pub utc_offset: Option<FixedOffset>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `YEARGRID_YEAR` - Year to render (default: the current year)
    /// - `YEARGRID_TEMPLATE` - Page template path (default: built-in template)
    /// - `YEARGRID_UTC_OFFSET` - Display offset (default: system local time)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let year = var("YEARGRID_YEAR")
            .map(|value| {
                value.trim().parse().map_err(|_| ConfigError::InvalidVar {
                    key: "YEARGRID_YEAR",
                    value,
                })
            })
            .transpose()?;

        let utc_offset = var("YEARGRID_UTC_OFFSET")
            .map(|value| parse_utc_offset(&value))
            .transpose()?;

        Ok(Self {
            year,
            template: var("YEARGRID_TEMPLATE").map(PathBuf::from),
            utc_offset,
        })
    }
}

/// Parses `+HH:MM`, `-HH:MM`, `+HHMM`, `Z` or `UTC` into a fixed offset.
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::InvalidOffset(value.to_string());
    let trimmed = value.trim();

    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    trimmed.parse::<FixedOffset>().map_err(|_| invalid())
}
