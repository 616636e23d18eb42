//! Layout and window size validation.

use crate::schema::ClassdockConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate header/sidebar geometry and the initial window size.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &ClassdockConfig) {
    validate_range_f64(
        errors,
        "layout.header_height",
        config.layout.header_height,
        0.0,
        200.0,
    );
    validate_range_f64(
        errors,
        "layout.sidebar_width",
        config.layout.sidebar_width,
        0.0,
        800.0,
    );
    validate_range(
        errors,
        "window.width",
        u64::from(config.window.width),
        400,
        7680,
    );
    validate_range(
        errors,
        "window.height",
        u64::from(config.window.height),
        300,
        4320,
    );
}
