//! Configuration schema.
//!
//! Every section is `#[serde(default)]`, so a partial file only overrides
//! what it names.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default labels for the buttons every dialog is created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    pub ok: String,
    pub cancel: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            ok: "Done".to_string(),
            cancel: "Cancel".to_string(),
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for this level, scoped to our crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "dlgsync=debug",
            LogLevel::Info => "dlgsync=info",
            LogLevel::Warning => "dlgsync=warn",
            LogLevel::Error => "dlgsync=error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Case-insensitive; accepts `warn` as well as `warning`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!(
                "unknown log level '{other}' (expected debug, info, warn or error)"
            )),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DlgsyncConfig {
    pub labels: LabelsConfig,
    pub logging: LoggingConfig,
}
