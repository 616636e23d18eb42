//! Host window layout: header strip and collapsible sidebar.

use serde::{Deserialize, Serialize};

/// Geometry inputs for the active view's rectangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of the header strip above the embedded view (valid range: 0-200).
    pub header_height: f64,
    /// Width taken by the sidebar when it is open (valid range: 0-800).
    pub sidebar_width: f64,
    /// Whether the sidebar starts open.
    pub sidebar_open: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_height: 48.0,
            sidebar_width: 280.0,
            sidebar_open: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
