//! Embedded-view lifecycle core for the Classdock shell.
//!
//! Provides:
//! - Geometry of the active view inside the host window
//! - `ViewManager`: create, switch, bound, destroy and track views
//! - Event relay from per-view runtime signals to UI notifications
//! - Host window bridge (resize, maximize, scale, close, sidebar)
//! - A serialized command loop for callers without `&mut` access
//! - The `wry` backend

pub mod events;
pub mod geometry;
pub mod ipc;
pub mod manager;
pub mod relay;
pub mod runtime;
pub mod settle;
pub mod wry_backend;

#[cfg(test)]
pub(crate) mod testing;

pub use events::{PageLoadState, ViewEvent, ViewEventKind, ViewEventSender};
pub use geometry::{compute_bounds, SidebarState};
pub use manager::{
    DriverExit, InitReport, ManagedView, ManagerConfig, StandardApp, ViewCommand, ViewHandle,
    ViewManager, ViewRegistry, ViewState, ViewStats, WindowSignal,
};
pub use relay::{EventRelay, ExternalLinkPolicy, ExternalOpener, SystemOpener};
pub use runtime::{EmbeddingRuntime, HostWindow, SurfaceRequest, ViewOptions, ViewSurface};
pub use settle::{NoSettle, SettleStrategy, TimedSettle};
pub use wry_backend::{WryRuntime, WrySurface};
