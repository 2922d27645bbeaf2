//! yeargrid - render calendar event files as a year-at-a-glance HTML page.

pub mod cli;
pub mod commands;
pub mod config;
pub mod input;
pub mod output;
pub mod template;

pub use config::{Config, ConfigError};
pub use template::{Template, TemplateError};
