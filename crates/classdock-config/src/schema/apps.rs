//! The fixed set of school services embedded at startup.

use serde::{Deserialize, Serialize};

/// One standard app: a service that gets its own embedded view at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Stable view id, unique across the app list.
    pub id: String,
    /// Initial URL (`http://` or `https://`).
    pub url: String,
    /// Hidden apps are skipped by startup creation.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Label shown in the sidebar.
    #[serde(default)]
    pub title: String,
}

fn default_visible() -> bool {
    true
}

impl AppConfig {
    pub fn new(id: impl Into<String>, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            visible: true,
            title: title.into(),
        }
    }
}

/// Default service list, in sidebar order.
pub fn default_apps() -> Vec<AppConfig> {
    vec![
        AppConfig::new("cloud", "https://cloud.school.example/", "Cloud"),
        AppConfig::new("lms", "https://lms.school.example/", "Courses"),
        AppConfig::new("mail", "https://mail.school.example/", "Mail"),
        AppConfig::new("timetable", "https://timetable.school.example/", "Timetable"),
        AppConfig::new("meet", "https://meet.school.example/", "Meetings"),
    ]
}
