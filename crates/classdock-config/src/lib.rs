//! Classdock configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! sensible defaults so partial configs work out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::ClassdockConfig;

use classdock_common::ConfigError;
use std::path::Path;

/// Load config from `path` when given, else from the platform default path.
///
/// A missing file is created from the commented template and defaults are
/// returned. A file that parses but fails validation also yields defaults;
/// only unreadable or malformed files are errors.
pub fn load_config(path: Option<&Path>) -> Result<ClassdockConfig, ConfigError> {
    match path {
        Some(p) => toml_loader::load_or_create(p),
        None => toml_loader::load_default(),
    }
}
