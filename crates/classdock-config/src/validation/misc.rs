//! Validation for timing, startup, the app list, and external link patterns.

use std::collections::HashSet;

use crate::schema::ClassdockConfig;

use super::helpers::validate_range;

/// Validate settle intervals.
pub(crate) fn validate_timing(errors: &mut Vec<String>, config: &ClassdockConfig) {
    validate_range(
        errors,
        "timing.detach_settle_ms",
        config.timing.detach_settle_ms,
        0,
        2000,
    );
    validate_range(
        errors,
        "timing.attach_settle_ms",
        config.timing.attach_settle_ms,
        0,
        2000,
    );
}

/// Validate startup constraints.
pub(crate) fn validate_startup(errors: &mut Vec<String>, config: &ClassdockConfig) {
    validate_range(
        errors,
        "startup.max_concurrent_creates",
        u64::from(config.startup.max_concurrent_creates),
        1,
        16,
    );
    if let Some(initial) = &config.startup.initial_app {
        if config.app(initial).is_none() {
            errors.push(format!(
                "startup.initial_app = \"{initial}\" does not name a configured app"
            ));
        }
    }
}

/// Validate app ids (non-empty, unique) and URLs (http or https).
pub(crate) fn validate_apps(errors: &mut Vec<String>, config: &ClassdockConfig) {
    let mut seen = HashSet::new();
    for (i, app) in config.apps.iter().enumerate() {
        if app.id.trim().is_empty() {
            errors.push(format!("apps[{i}].id is empty"));
        } else if !seen.insert(app.id.as_str()) {
            errors.push(format!("apps[{i}].id \"{}\" is duplicated", app.id));
        }
        if !(app.url.starts_with("https://") || app.url.starts_with("http://")) {
            errors.push(format!(
                "apps[{i}].url \"{}\" must start with http:// or https://",
                app.url
            ));
        }
    }
}

/// Every external-link pattern must be a valid regular expression.
pub(crate) fn validate_external_links(errors: &mut Vec<String>, config: &ClassdockConfig) {
    for (i, pattern) in config.external_links.patterns.iter().enumerate() {
        if let Err(e) = regex::Regex::new(pattern) {
            errors.push(format!("external_links.patterns[{i}] is invalid: {e}"));
        }
    }
}
