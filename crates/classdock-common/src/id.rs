use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Stable identifier of one embedded surface ("mail", "lms", a popup id...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh id for a view opened from a link target, e.g. `popup-1b4e28ba`.
    pub fn generated(prefix: &str) -> Self {
        let uuid = new_id();
        Self(format!("{prefix}-{}", &uuid[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ViewId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for ViewId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_uuid_format() {
        let id = new_id();
        assert_eq!(id.len(), 36);
        assert_eq!(id.chars().filter(|&c| c == '-').count(), 4);
    }

    #[test]
    fn generated_ids_are_prefixed_and_unique() {
        let a = ViewId::generated("popup");
        let b = ViewId::generated("popup");
        assert!(a.as_str().starts_with("popup-"));
        assert_eq!(a.as_str().len(), "popup-".len() + 8);
        assert_ne!(a, b);
    }

    #[test]
    fn view_id_display_is_raw_string() {
        assert_eq!(ViewId::from("timetable").to_string(), "timetable");
    }

    #[test]
    fn view_id_serializes_transparently() {
        let id = ViewId::new("mail");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"mail\"");
        let back: ViewId = serde_json::from_str("\"mail\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn view_id_borrows_as_str_for_map_lookup() {
        let mut map = std::collections::HashMap::new();
        map.insert(ViewId::from("lms"), 1);
        assert_eq!(map.get("lms"), Some(&1));
    }
}
