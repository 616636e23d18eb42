//! Preload bridge between page scripts and the shell.
//!
//! The bridge is the only script channel into a view. It reports a small
//! set of page-side signals back through `window.ipc.postMessage`; nothing
//! native is exposed to the page.
//!
//! Load failures are read from the main document's navigation timing entry,
//! so only HTTP error responses are reported. Network-level failures (DNS,
//! TLS, offline) never reach page scripts and wry has no callback for them;
//! those go unreported.

use serde::{Deserialize, Serialize};

use crate::events::ViewEventKind;

/// A message posted by the preload bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum BridgeMessage {
    /// Right click while text was selected.
    #[serde(rename_all = "camelCase")]
    ContextMenu {
        selection_text: String,
        x: f64,
        y: f64,
    },
    /// The main document was served with an HTTP error status.
    #[serde(rename_all = "camelCase")]
    LoadFailed {
        code: i32,
        description: String,
        url: String,
    },
}

impl BridgeMessage {
    /// Parse a raw IPC body. Unknown or malformed messages yield `None`,
    /// as does a load failure whose code is not an HTTP error status.
    pub fn from_json(raw: &str) -> Option<Self> {
        let message: Self = serde_json::from_str(raw).ok()?;
        if let BridgeMessage::LoadFailed { code, .. } = &message {
            if !HTTP_ERROR_STATUS.contains(code) {
                return None;
            }
        }
        Some(message)
    }

    pub fn into_event(self) -> ViewEventKind {
        match self {
            BridgeMessage::ContextMenu {
                selection_text,
                x,
                y,
            } => ViewEventKind::ContextMenu {
                selection_text,
                x,
                y,
            },
            BridgeMessage::LoadFailed {
                code,
                description,
                url,
            } => ViewEventKind::LoadFailed {
                code,
                description,
                url,
            },
        }
    }
}

const HTTP_ERROR_STATUS: std::ops::RangeInclusive<i32> = 400..=599;

/// Injected into every view before page scripts run.
pub const BRIDGE_INIT_SCRIPT: &str = r#"
(function() {
    if (window.__classdockBridge) { return; }
    window.__classdockBridge = true;

    function post(kind, payload) {
        try {
            window.ipc.postMessage(JSON.stringify({ kind: kind, payload: payload }));
        } catch (_) {}
    }

    window.addEventListener('contextmenu', function(e) {
        var selection = String(window.getSelection() || '');
        if (selection.trim().length === 0) { return; }
        post('contextMenu', { selectionText: selection, x: e.screenX, y: e.screenY });
    }, true);

    window.addEventListener('load', function() {
        if (window.top !== window || !window.performance || !performance.getEntriesByType) { return; }
        var nav = performance.getEntriesByType('navigation')[0];
        var status = nav && typeof nav.responseStatus === 'number' ? nav.responseStatus : 0;
        if (status < 400) { return; }
        post('loadFailed', { code: status, description: 'HTTP ' + status, url: location.href });
    });
})();
"#;

/// Bridge script plus any per-view addition.
pub fn preload_script(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.trim().is_empty() => format!("{BRIDGE_INIT_SCRIPT}\n{extra}"),
        _ => BRIDGE_INIT_SCRIPT.to_string(),
    }
}
