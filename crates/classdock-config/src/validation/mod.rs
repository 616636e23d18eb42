//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod layout;
mod misc;


use crate::schema::ClassdockConfig;
use classdock_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ClassdockConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);
    misc::validate_timing(&mut errors, config);
    misc::validate_startup(&mut errors, config);
    misc::validate_apps(&mut errors, config);
    misc::validate_external_links(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
