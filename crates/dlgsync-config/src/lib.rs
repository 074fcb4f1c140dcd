//! dlgsync configuration.
//!
//! TOML file with two sections, `[labels]` (default button labels) and
//! `[logging]`. All fields have defaults, so partial or missing files work.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{DlgsyncConfig, LabelsConfig, LogLevel, LoggingConfig};

use dlgsync_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
pub fn load_config(path: Option<&Path>) -> Result<DlgsyncConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}
