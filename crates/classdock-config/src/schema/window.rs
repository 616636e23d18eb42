//! Host window settings.

use serde::{Deserialize, Serialize};

/// Initial host window size and title.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 400-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 300-4320).
    pub height: u32,
    pub start_maximized: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Classdock".to_string(),
            width: 1280,
            height: 800,
            start_maximized: false,
        }
    }
}
