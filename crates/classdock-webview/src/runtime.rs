//! Seams to the embedding runtime and the host window.
//!
//! The lifecycle manager only talks to these traits, so the wry backend can
//! be swapped for an instrumented fake in tests or another runtime later.

use async_trait::async_trait;
use classdock_common::{Rect, RuntimeError, Size, ViewId};

use crate::events::ViewEventSender;

/// Per-view creation options.
///
/// Defaults are the secure ones: a storage partition private to the view,
/// no native API exposure, and script injection only through the preload
/// bridge.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// Storage partition name. `None` gives the view its own partition.
    pub partition: Option<String>,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Extra script appended to the preload bridge.
    pub preload_script: Option<String>,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            partition: None,
            user_agent: None,
            preload_script: None,
            devtools: cfg!(debug_assertions),
            autoplay: false,
        }
    }
}

impl ViewOptions {
    /// Partition the view's storage lives in.
    pub fn partition_for(&self, id: &ViewId) -> String {
        self.partition
            .clone()
            .unwrap_or_else(|| format!("persist:{id}"))
    }
}

/// Everything a runtime needs to build one surface.
#[derive(Debug)]
pub struct SurfaceRequest {
    pub id: ViewId,
    pub url: String,
    pub options: ViewOptions,
    /// Initial bounds; the surface starts detached.
    pub bounds: Rect,
    /// Sink for this surface's lifecycle signals.
    pub events: ViewEventSender,
}

/// Factory for embedded content surfaces.
#[async_trait(?Send)]
pub trait EmbeddingRuntime {
    type Surface: ViewSurface;

    /// Create a detached surface and start loading `request.url`.
    async fn create_surface(&self, request: SurfaceRequest) -> Result<Self::Surface, RuntimeError>;
}

/// One embedded content surface. Owned exclusively by the view registry.
#[async_trait(?Send)]
pub trait ViewSurface {
    /// Make this surface the one shown in the host window.
    fn attach(&self) -> Result<(), RuntimeError>;
    fn detach(&self) -> Result<(), RuntimeError>;
    fn set_bounds(&self, bounds: Rect) -> Result<(), RuntimeError>;
    /// Bounds as the runtime currently reports them.
    fn bounds(&self) -> Result<Rect, RuntimeError>;
    fn focus(&self) -> Result<(), RuntimeError>;
    fn load_url(&self, url: &str) -> Result<(), RuntimeError>;
    fn reload(&self) -> Result<(), RuntimeError>;
    /// Fire-and-forget script evaluation.
    fn run_script(&self, code: &str) -> Result<(), RuntimeError>;
    /// Evaluate `code` and resolve with its JSON-serialized result.
    async fn execute_script(&self, code: &str) -> Result<String, RuntimeError>;
    /// Release runtime resources ahead of drop.
    fn release(&self) {}
}

/// The window views are embedded in.
pub trait HostWindow {
    /// Current content-area size, or `None` once the window is gone.
    fn content_size(&self) -> Option<Size>;
}
