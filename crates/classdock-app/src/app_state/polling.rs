//! Polling of view events and notifications.

use std::time::Instant;

use classdock_common::{Notification, ViewId};
use tokio::sync::broadcast::error::TryRecvError;
use winit::event_loop::ActiveEventLoop;

use super::core::ClassdockApp;
use super::types::POLL_INTERVAL;

impl ClassdockApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_view_events();
        }

        event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(
            Instant::now() + POLL_INTERVAL,
        ));
    }

    /// Fold pending runtime signals into the manager, then act on whatever
    /// it published.
    pub(super) fn poll_view_events(&mut self) {
        if let Some(views) = self.views.as_mut() {
            views.pump_events();
        }

        let mut pending = Vec::new();
        if let Some(rx) = self.notifications.as_mut() {
            loop {
                match rx.try_recv() {
                    Ok(notification) => pending.push(notification),
                    Err(TryRecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "notification receiver lagged");
                    }
                    Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                }
            }
        }

        for notification in pending {
            self.handle_notification(notification);
        }
    }

    fn handle_notification(&mut self, notification: Notification) {
        match notification {
            Notification::Activated { id } => {
                self.active_label = id.map(|id| self.label_for(&id));
                self.update_window_title();
            }
            Notification::NewWindowRequested { id, url } => self.open_popup(&id, &url),
            Notification::TitleChanged { ref id, ref title } => {
                tracing::trace!(id = %id, title = %title, "page title");
            }
            other => tracing::debug!(notification = ?other, "view notification"),
        }
    }

    /// Sidebar label of a configured app, or the raw id for popups.
    fn label_for(&self, id: &ViewId) -> String {
        self.config
            .app(id.as_str())
            .map(|app| app.title.clone())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| id.to_string())
    }

    /// Links that stay in the shell open as a popup view in the same
    /// session as the page that opened them.
    fn open_popup(&mut self, source: &ViewId, url: &str) {
        let Some(views) = self.views.as_mut() else {
            return;
        };
        if let Err(e) = self.runtime.block_on(views.open_popup(source, url)) {
            tracing::warn!(source = %source, url = %url, error = %e, "failed to open popup");
        }
    }
}
