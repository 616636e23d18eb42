//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Tracing filter directive for this level, scoped to our crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "classdock=trace",
            LogLevel::Debug => "classdock=debug",
            LogLevel::Info => "classdock=info",
            LogLevel::Warn => "classdock=warn",
            LogLevel::Error => "classdock=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
