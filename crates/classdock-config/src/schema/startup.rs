//! Startup behavior.

use serde::{Deserialize, Serialize};

/// What happens between window creation and the first visible view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Upper bound on standard apps created in parallel (valid range: 1-16).
    pub max_concurrent_creates: u32,
    /// App shown once startup creation completes. Falls back to the first
    /// created app when unset or unknown.
    pub initial_app: Option<String>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            max_concurrent_creates: 4,
            initial_app: None,
        }
    }
}
