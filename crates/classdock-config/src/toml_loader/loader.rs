//! Core TOML config loading: read from path or platform default.

use crate::schema::ClassdockConfig;
use crate::validation;
use classdock_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// If validation fails, a warning is logged and the default config is
/// returned instead.
pub fn load_from_path(path: &Path) -> Result<ClassdockConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ClassdockConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(ClassdockConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, writing a commented default there first if the
/// file does not exist yet.
pub fn load_or_create(path: &Path) -> Result<ClassdockConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(ClassdockConfig::default())
        }
        other => other,
    }
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/classdock/config.toml`
/// On Linux: `~/.config/classdock/config.toml`
pub fn load_default() -> Result<ClassdockConfig, ConfigError> {
    let path = default_config_path()?;
    load_or_create(&path)
}
