//! Translation of per-view signals into host UI notifications.

use std::process::{Command, Stdio};

use classdock_common::Notification;
use regex::RegexSet;
use tracing::{debug, info, warn};

use crate::events::{ViewEvent, ViewEventKind};

// =============================================================================
// EXTERNAL LINK POLICY
// =============================================================================

/// Decides which new-window targets bypass the shell.
#[derive(Debug, Clone)]
pub struct ExternalLinkPolicy {
    patterns: RegexSet,
}

impl ExternalLinkPolicy {
    pub fn new<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            patterns: RegexSet::new(patterns)?,
        })
    }

    /// A policy that keeps every link in the shell.
    pub fn none() -> Self {
        Self {
            patterns: RegexSet::empty(),
        }
    }

    pub fn must_open_externally(&self, url: &str) -> bool {
        self.patterns.is_match(url)
    }
}

impl Default for ExternalLinkPolicy {
    fn default() -> Self {
        Self::none()
    }
}

/// Hands a URL to something outside the shell.
pub trait ExternalOpener {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// The operating system's default URL handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        #[cfg(target_os = "macos")]
        let mut command = {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        };

        #[cfg(target_os = "windows")]
        let mut command = {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        };

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let mut command = {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        };

        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}

// =============================================================================
// RELAY
// =============================================================================

/// Turns `ViewEvent`s into outward `Notification`s, applying the
/// new-window policy on the way.
pub struct EventRelay {
    policy: ExternalLinkPolicy,
    opener: Box<dyn ExternalOpener>,
}

impl EventRelay {
    pub fn new(policy: ExternalLinkPolicy, opener: Box<dyn ExternalOpener>) -> Self {
        Self { policy, opener }
    }

    pub fn policy(&self) -> &ExternalLinkPolicy {
        &self.policy
    }

    /// Returns the notification to forward, or `None` when the event is
    /// consumed here (deflected link, empty selection).
    pub fn translate(&self, event: ViewEvent) -> Option<Notification> {
        let ViewEvent { id, kind, .. } = event;
        match kind {
            ViewEventKind::LoadStarted => Some(Notification::Loading { id, loading: true }),
            ViewEventKind::LoadStopped => Some(Notification::Loading { id, loading: false }),
            ViewEventKind::LoadFinished { url } => Some(Notification::Loaded { id, url }),
            ViewEventKind::Navigated { url } => Some(Notification::Navigated { id, url }),
            ViewEventKind::LoadFailed {
                code,
                description,
                url,
            } => {
                warn!(id = %id, code, description = %description, url = %url, "view load failed");
                Some(Notification::Error {
                    id,
                    code,
                    description,
                    url,
                })
            }
            ViewEventKind::NewWindowRequested { url } => {
                if self.policy.must_open_externally(&url) {
                    info!(id = %id, url = %url, "opening link in system handler");
                    if let Err(e) = self.opener.open(&url) {
                        warn!(id = %id, url = %url, error = %e, "system handler failed");
                    }
                    None
                } else {
                    debug!(id = %id, url = %url, "new window requested");
                    Some(Notification::NewWindowRequested { id, url })
                }
            }
            ViewEventKind::ContextMenu {
                selection_text,
                x,
                y,
            } => {
                if selection_text.trim().is_empty() {
                    return None;
                }
                Some(Notification::ContextMenu {
                    id,
                    selection_text,
                    x,
                    y,
                })
            }
            ViewEventKind::TitleChanged { title } => Some(Notification::TitleChanged { id, title }),
        }
    }
}

impl Default for EventRelay {
    fn default() -> Self {
        Self::new(ExternalLinkPolicy::none(), Box::new(SystemOpener))
    }
}

// =============================================================================
// TESTS
// =============================================================================
