//! Embedded-view lifecycle management.
//!
//! `ViewManager` creates, switches, bounds and destroys the content surfaces
//! of one host window. At most one surface is attached at any time; every
//! other registered surface stays alive but detached so switching back is
//! instant and keeps its session.

use std::cell::Cell;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use classdock_common::{Notification, NotificationBus, Rect, ViewId};
use tokio::sync::{broadcast, mpsc};

use crate::events::ViewEvent;
use crate::geometry::{compute_bounds, SidebarState};
use crate::relay::EventRelay;
use crate::runtime::{EmbeddingRuntime, HostWindow};
use crate::settle::{SettleStrategy, TimedSettle};

mod dispatch;
mod driver;
mod host_bridge;
mod lifecycle;
mod navigation;
mod registry;
mod switching;
mod types;


pub use driver::{DriverExit, ViewCommand, ViewHandle};
pub use host_bridge::WindowSignal;
pub use registry::ViewRegistry;
pub use types::{InitReport, ManagedView, StandardApp, ViewState, ViewStats};

/// Layout and startup knobs for a manager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManagerConfig {
    pub header_height: f64,
    pub sidebar: SidebarState,
    pub max_concurrent_creates: usize,
    /// Upper bound on a single `execute_script` round trip.
    pub script_timeout: Duration,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            header_height: 48.0,
            sidebar: SidebarState::new(false, 280.0),
            max_concurrent_creates: 4,
            script_timeout: Duration::from_secs(10),
        }
    }
}

/// Owns every embedded surface of one host window.
pub struct ViewManager<R: EmbeddingRuntime, H: HostWindow> {
    runtime: R,
    host: H,
    registry: ViewRegistry<R::Surface>,
    /// The only attached view, if any.
    active: Option<ViewId>,
    sidebar: SidebarState,
    header_height: f64,
    settle: Box<dyn SettleStrategy>,
    relay: EventRelay,
    bus: Arc<NotificationBus>,
    events_tx: mpsc::UnboundedSender<ViewEvent>,
    events_rx: mpsc::UnboundedReceiver<ViewEvent>,
    initialized: bool,
    max_concurrent_creates: usize,
    script_timeout: Duration,
    host_closed: bool,
    /// Generation handed to the next surface; never reused.
    next_generation: Cell<u64>,
    /// Views opened from in-page links, destroyed once hidden.
    popups: HashSet<ViewId>,
}

impl<R: EmbeddingRuntime, H: HostWindow> ViewManager<R, H> {
    pub fn new(runtime: R, host: H, config: ManagerConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            runtime,
            host,
            registry: ViewRegistry::new(),
            active: None,
            sidebar: config.sidebar,
            header_height: config.header_height,
            settle: Box::new(TimedSettle::default()),
            relay: EventRelay::default(),
            bus: Arc::new(NotificationBus::default()),
            events_tx,
            events_rx,
            initialized: false,
            max_concurrent_creates: config.max_concurrent_creates.max(1),
            script_timeout: config.script_timeout,
            host_closed: false,
            next_generation: Cell::new(1),
            popups: HashSet::new(),
        }
    }

    pub fn with_settle(mut self, settle: impl SettleStrategy + 'static) -> Self {
        self.settle = Box::new(settle);
        self
    }

    pub fn with_relay(mut self, relay: EventRelay) -> Self {
        self.relay = relay;
        self
    }

    /// Publish on a bus shared with other components.
    pub fn with_bus(mut self, bus: Arc<NotificationBus>) -> Self {
        self.bus = bus;
        self
    }

    // -- Queries --

    pub fn get_view(&self, id: &ViewId) -> Option<&ManagedView<R::Surface>> {
        self.registry.get(id)
    }

    pub fn get_url(&self, id: &ViewId) -> Option<&str> {
        self.registry.get(id).map(|view| view.current_url())
    }

    pub fn active_id(&self) -> Option<&ViewId> {
        self.active.as_ref()
    }

    pub fn list_ids(&self) -> Vec<ViewId> {
        self.registry.ids()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn stats(&self) -> ViewStats {
        ViewStats {
            count: self.registry.len(),
            active_id: self.active.clone(),
            initialized: self.initialized,
        }
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    // -- Notifications --

    pub fn notifications(&self) -> Arc<NotificationBus> {
        Arc::clone(&self.bus)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.bus.subscribe()
    }

    /// Fire-and-forget; a no-op once the host window has closed.
    pub(crate) fn emit(&self, notification: Notification) {
        if self.host_closed {
            return;
        }
        self.bus.publish(notification);
    }

    fn allocate_generation(&self) -> u64 {
        let generation = self.next_generation.get();
        self.next_generation.set(generation + 1);
        generation
    }

    /// Bounds the active view should have right now, if the host is alive.
    pub fn current_bounds(&self) -> Option<Rect> {
        self.host
            .content_size()
            .map(|size| compute_bounds(size, self.header_height, self.sidebar))
    }
}
