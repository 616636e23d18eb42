//! Window title management: reflects the active app.

use super::core::ClassdockApp;

// =============================================================================
// WINDOW TITLE
// =============================================================================

impl ClassdockApp {
    /// Format: "{app} - {window title}", or just the window title.
    pub(super) fn window_title(&self) -> String {
        match &self.active_label {
            Some(label) => format!("{label} - {}", self.config.window.title),
            None => self.config.window.title.clone(),
        }
    }

    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };
        window.set_title(&self.window_title());
    }
}

// =============================================================================
// TESTS
// =============================================================================
