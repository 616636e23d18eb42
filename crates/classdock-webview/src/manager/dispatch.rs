use tracing::debug;

use crate::events::ViewEvent;
use crate::runtime::{EmbeddingRuntime, HostWindow};

use super::ViewManager;

impl<R: EmbeddingRuntime, H: HostWindow> ViewManager<R, H> {
    /// Fold one runtime signal into the registry and forward it to the UI.
    /// Signals from views that no longer exist, or from an earlier surface
    /// under the same id, are dropped.
    pub fn dispatch_event(&mut self, event: ViewEvent) {
        let Some(view) = self.registry.get_mut(&event.id) else {
            debug!(id = %event.id, kind = ?event.kind, "event for unknown view dropped");
            return;
        };
        if view.generation != event.generation {
            debug!(
                id = %event.id,
                generation = event.generation,
                current = view.generation,
                "event from a replaced surface dropped"
            );
            return;
        }
        view.apply_event(&event.kind);

        if let Some(notification) = self.relay.translate(event) {
            self.emit(notification);
        }
    }

    /// Dispatch every signal queued so far. Returns how many were handled.
    pub fn pump_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.dispatch_event(event);
            handled += 1;
        }
        handled
    }
}
