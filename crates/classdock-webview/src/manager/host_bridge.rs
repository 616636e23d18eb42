use classdock_common::Rect;
use tracing::{debug, info};

use crate::runtime::{EmbeddingRuntime, HostWindow};

use super::ViewManager;

/// Host window changes that affect the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSignal {
    Resized,
    Maximized,
    Unmaximized,
    ScaleFactorChanged,
    Closed,
}

impl<R: EmbeddingRuntime, H: HostWindow> ViewManager<R, H> {
    pub fn handle_window_signal(&mut self, signal: WindowSignal) {
        match signal {
            WindowSignal::Resized
            | WindowSignal::Maximized
            | WindowSignal::Unmaximized
            | WindowSignal::ScaleFactorChanged => {
                debug!(?signal, "host window changed");
                self.relayout_active();
            }
            WindowSignal::Closed => {
                info!("host window closed, releasing views");
                self.host_closed = true;
                self.cleanup();
            }
        }
    }

    /// Recompute and apply bounds for the active view only.
    pub fn relayout_active(&self) -> Option<Rect> {
        let active = self.active.as_ref()?;
        self.apply_bounds(active)
    }

    /// Open or close the sidebar. Returns `false` when nothing changed.
    pub fn set_sidebar_state(&mut self, open: bool) -> bool {
        if self.sidebar.open == open {
            return false;
        }
        self.sidebar.open = open;
        debug!(open, "sidebar toggled");
        self.relayout_active();
        true
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar.open
    }

    pub fn is_host_closed(&self) -> bool {
        self.host_closed
    }
}
