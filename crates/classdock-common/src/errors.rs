use std::path::PathBuf;

use crate::id::ViewId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Raw failure reported by an embedding runtime or host window.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("runtime rejected request: {0}")]
    Rejected(String),
}

/// Failure of a view lifecycle operation, tagged with the view it concerns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("failed to create view {id}: {reason}")]
    Creation { id: ViewId, reason: String },

    #[error("no view registered with id {0}")]
    NotFound(ViewId),

    #[error("failed to attach or detach view {id}: {reason}")]
    Attach { id: ViewId, reason: String },

    #[error("failed to load in view {id}: {reason}")]
    Load { id: ViewId, reason: String },

    #[error("script execution failed in view {id}: {reason}")]
    Script { id: ViewId, reason: String },
}

impl ViewError {
    pub fn creation(id: &ViewId, err: impl std::fmt::Display) -> Self {
        Self::Creation {
            id: id.clone(),
            reason: err.to_string(),
        }
    }

    pub fn attach(id: &ViewId, err: impl std::fmt::Display) -> Self {
        Self::Attach {
            id: id.clone(),
            reason: err.to_string(),
        }
    }

    pub fn load(id: &ViewId, err: impl std::fmt::Display) -> Self {
        Self::Load {
            id: id.clone(),
            reason: err.to_string(),
        }
    }

    pub fn script(id: &ViewId, err: impl std::fmt::Display) -> Self {
        Self::Script {
            id: id.clone(),
            reason: err.to_string(),
        }
    }

    /// The view this error refers to.
    pub fn view_id(&self) -> &ViewId {
        match self {
            Self::Creation { id, .. }
            | Self::Attach { id, .. }
            | Self::Load { id, .. }
            | Self::Script { id, .. }
            | Self::NotFound(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("apps[0].url is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: apps[0].url is empty"
        );
    }

    #[test]
    fn view_error_display() {
        let id = ViewId::from("mail");

        let err = ViewError::NotFound(id.clone());
        assert_eq!(err.to_string(), "no view registered with id mail");

        let err = ViewError::creation(&id, RuntimeError::Rejected("bad url".into()));
        assert_eq!(
            err.to_string(),
            "failed to create view mail: runtime rejected request: bad url"
        );

        let err = ViewError::attach(&id, "parent gone");
        assert_eq!(
            err.to_string(),
            "failed to attach or detach view mail: parent gone"
        );

        let err = ViewError::load(&id, "net::ERR_NAME_NOT_RESOLVED");
        assert_eq!(
            err.to_string(),
            "failed to load in view mail: net::ERR_NAME_NOT_RESOLVED"
        );

        let err = ViewError::script(&id, "ReferenceError: foo is not defined");
        assert!(err.to_string().contains("ReferenceError"));
    }

    #[test]
    fn view_error_reports_its_view() {
        let id = ViewId::from("lms");
        assert_eq!(ViewError::NotFound(id.clone()).view_id(), &id);
        assert_eq!(ViewError::attach(&id, "x").view_id(), &id);
    }
}
