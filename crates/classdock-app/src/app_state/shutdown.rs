//! Graceful shutdown: release every view before the window goes away.

use classdock_webview::WindowSignal;

use super::core::ClassdockApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl ClassdockApp {
    /// Order matters: views are released while their parent window still
    /// exists, then the window is dropped.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut views) = self.views.take() {
            views.handle_window_signal(WindowSignal::Closed);
        }
        self.notifications = None;
        self.active_label = None;
        self.window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
