use classdock_common::{Notification, Rect, ViewError, ViewId};
use tracing::{debug, error, info, warn};

use crate::runtime::{EmbeddingRuntime, HostWindow, ViewSurface};

use super::ViewManager;

impl<R: EmbeddingRuntime, H: HostWindow> ViewManager<R, H> {
    /// Make `id` the only attached view.
    ///
    /// The previous view is detached before the new one is attached, with a
    /// settle wait in between. On attach failure nothing is left attached
    /// and the active pointer stays empty. A popup that was detached here is
    /// destroyed.
    pub async fn show_view(&mut self, id: &ViewId) -> Result<(), ViewError> {
        if !self.registry.contains(id) {
            warn!(id = %id, "show requested for unknown view");
            return Err(ViewError::NotFound(id.clone()));
        }

        if self.active.as_ref() == Some(id) {
            return self.reassert_active(id);
        }

        let previous = self.active.take();
        if let Some(prev) = &previous {
            if let Some(view) = self.registry.get(prev) {
                if let Err(e) = view.surface.detach() {
                    error!(id = %prev, error = %e, "failed to detach previous view");
                    self.active = previous.clone();
                    return Err(ViewError::attach(prev, e));
                }
                debug!(id = %prev, "view detached");
            }
        }

        self.settle.after_detach().await;

        let attached = match self.registry.get(id) {
            Some(view) => view.surface.attach(),
            None => return Err(ViewError::NotFound(id.clone())),
        };
        if let Err(e) = attached {
            error!(id = %id, error = %e, "failed to attach view");
            if let Some(prev) = &previous {
                self.emit(Notification::Activated { id: None });
                self.close_if_popup(prev);
            }
            return Err(ViewError::attach(id, e));
        }
        self.active = Some(id.clone());

        self.apply_bounds(id);
        self.settle.after_attach().await;
        self.focus_view(id);
        self.verify_bounds(id);

        info!(id = %id, "view activated");
        self.emit(Notification::Activated {
            id: Some(id.clone()),
        });
        if let Some(prev) = &previous {
            self.close_if_popup(prev);
        }
        Ok(())
    }

    /// Detach the active view and clear the pointer. No-op when nothing is
    /// attached.
    pub fn hide_active(&mut self) -> Result<(), ViewError> {
        let Some(active) = self.active.take() else {
            return Ok(());
        };

        if let Some(view) = self.registry.get(&active) {
            if let Err(e) = view.surface.detach() {
                error!(id = %active, error = %e, "failed to detach active view");
                let err = ViewError::attach(&active, e);
                self.active = Some(active);
                return Err(err);
            }
        }

        info!(id = %active, "active view hidden");
        self.emit(Notification::Activated { id: None });
        self.close_if_popup(&active);
        Ok(())
    }

    /// Popups live only while shown.
    fn close_if_popup(&mut self, id: &ViewId) {
        if self.popups.contains(id) {
            debug!(id = %id, "closing hidden popup");
            self.destroy_view(id);
        }
    }

    /// Already active: attach again, rebound and refocus.
    fn reassert_active(&mut self, id: &ViewId) -> Result<(), ViewError> {
        let attached = match self.registry.get(id) {
            Some(view) => view.surface.attach(),
            None => return Err(ViewError::NotFound(id.clone())),
        };
        if let Err(e) = attached {
            error!(id = %id, error = %e, "failed to re-attach active view");
            self.active = None;
            self.emit(Notification::Activated { id: None });
            return Err(ViewError::attach(id, e));
        }

        self.apply_bounds(id);
        self.focus_view(id);
        debug!(id = %id, "active view re-asserted");
        Ok(())
    }

    /// Push the computed bounds to `id`. Returns what was applied.
    pub(crate) fn apply_bounds(&self, id: &ViewId) -> Option<Rect> {
        let Some(bounds) = self.current_bounds() else {
            debug!(id = %id, "host window gone, bounds not applied");
            return None;
        };
        let view = self.registry.get(id)?;
        match view.surface.set_bounds(bounds) {
            Ok(()) => Some(bounds),
            Err(e) => {
                warn!(id = %id, error = %e, "failed to set view bounds");
                None
            }
        }
    }

    fn focus_view(&self, id: &ViewId) {
        if let Some(view) = self.registry.get(id) {
            if let Err(e) = view.surface.focus() {
                warn!(id = %id, error = %e, "failed to focus view");
            }
        }
    }

    /// Some runtimes report an empty rect right after attach. Reapply once.
    fn verify_bounds(&self, id: &ViewId) {
        let Some(view) = self.registry.get(id) else {
            return;
        };
        match view.surface.bounds() {
            Ok(actual) if actual.is_degenerate() => {
                debug!(id = %id, ?actual, "degenerate bounds after attach, reapplying");
                self.apply_bounds(id);
            }
            Ok(_) => {}
            Err(e) => warn!(id = %id, error = %e, "failed to read back view bounds"),
        }
    }
}
