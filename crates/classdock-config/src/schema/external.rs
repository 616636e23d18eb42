//! Links that must leave the shell and open in the system handler.

use serde::{Deserialize, Serialize};

/// Regular expressions matched against new-window targets. A match sends
/// the URL to the system's default handler instead of the host UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalLinksConfig {
    pub patterns: Vec<String>,
}

impl Default for ExternalLinksConfig {
    fn default() -> Self {
        Self {
            patterns: default_external_patterns(),
        }
    }
}

/// Video-conferencing deep links that only work in the native clients.
pub fn default_external_patterns() -> Vec<String> {
    [
        r"^zoommtg://",
        r"^zoomus://",
        r"^https://([a-z0-9-]+\.)?zoom\.us/(j|s|w|wc|my)/",
        r"^msteams:",
        r"^https://teams\.microsoft\.com/l/meetup-join/",
        r"^https://teams\.live\.com/meet/",
        r"^webex://",
        r"^https://([a-z0-9-]+\.)?webex\.com/(meet|join|[a-z0-9-]+/j\.php)",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patterns_compile() {
        for pattern in default_external_patterns() {
            assert!(regex::Regex::new(&pattern).is_ok(), "bad pattern {pattern}");
        }
    }

    #[test]
    fn empty_list_from_toml() {
        let config: ExternalLinksConfig = toml::from_str("patterns = []").unwrap();
        assert!(config.patterns.is_empty());
    }
}
