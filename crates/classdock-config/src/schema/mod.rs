//! Configuration schema types for Classdock.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod apps;
mod external;
mod layout;
mod startup;
mod system;
mod timing;
mod window;

pub use apps::*;
pub use external::*;
pub use layout::*;
pub use startup::*;
pub use system::*;
pub use timing::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Classdock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassdockConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub timing: TimingConfig,
    pub startup: StartupConfig,
    pub apps: Vec<AppConfig>,
    pub external_links: ExternalLinksConfig,
    pub logging: LoggingConfig,
}

impl Default for ClassdockConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            layout: LayoutConfig::default(),
            timing: TimingConfig::default(),
            startup: StartupConfig::default(),
            apps: default_apps(),
            external_links: ExternalLinksConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ClassdockConfig {
    /// Look up a configured app by id.
    pub fn app(&self, id: &str) -> Option<&AppConfig> {
        self.apps.iter().find(|a| a.id == id)
    }
}
