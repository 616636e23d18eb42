//! `wry` implementation of the embedding runtime.
//!
//! Every view is a child webview of the host window. Detached views stay
//! alive but hidden. Each storage partition gets its own `WebContext` data
//! directory so cookies and local storage never leak between services.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use async_trait::async_trait;
use classdock_common::RuntimeError;
use tracing::{debug, warn};
use wry::raw_window_handle::HasWindowHandle;
use wry::{WebContext, WebViewBuilder};

use crate::events::{PageLoadState, ViewEventKind, ViewEventSender};
use crate::ipc::{preload_script, BridgeMessage};
use crate::runtime::{EmbeddingRuntime, SurfaceRequest};

mod bounds;
mod surface;

pub use bounds::{from_wry, to_wry};
pub use surface::WrySurface;

pub struct WryRuntime<W: HasWindowHandle> {
    parent: Arc<W>,
    data_root: PathBuf,
    contexts: RefCell<HashMap<String, WebContext>>,
    scale_factor: Rc<Cell<f64>>,
}

impl<W: HasWindowHandle> WryRuntime<W> {
    /// `data_root` holds one subdirectory per storage partition.
    pub fn new(parent: Arc<W>, data_root: PathBuf, scale_factor: f64) -> Self {
        Self {
            parent,
            data_root,
            contexts: RefCell::new(HashMap::new()),
            scale_factor: Rc::new(Cell::new(scale_factor)),
        }
    }

    pub fn set_scale_factor(&self, scale_factor: f64) {
        self.scale_factor.set(scale_factor);
    }

    fn partition_dir(&self, partition: &str) -> PathBuf {
        let name = partition.strip_prefix("persist:").unwrap_or(partition);
        let safe: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.data_root.join(safe)
    }
}

#[async_trait(?Send)]
impl<W: HasWindowHandle> EmbeddingRuntime for WryRuntime<W> {
    type Surface = WrySurface;

    async fn create_surface(&self, request: SurfaceRequest) -> Result<WrySurface, RuntimeError> {
        let SurfaceRequest {
            id,
            url,
            options,
            bounds,
            events,
        } = request;

        let partition = options.partition_for(&id);
        let data_dir = self.partition_dir(&partition);
        let mut contexts = self.contexts.borrow_mut();
        let context = contexts
            .entry(partition.clone())
            .or_insert_with(|| WebContext::new(Some(data_dir)));

        let mut builder = WebViewBuilder::with_web_context(context)
            .with_url(&url)
            .with_bounds(to_wry(&bounds))
            .with_visible(false)
            .with_focused(false)
            .with_devtools(options.devtools)
            .with_autoplay(options.autoplay)
            .with_initialization_script(&preload_script(options.preload_script.as_deref()));

        if let Some(ua) = &options.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = attach_page_load_handler(builder, events.clone());
        builder = attach_navigation_handler(builder, events.clone());
        builder = attach_new_window_handler(builder, events.clone());
        builder = attach_title_handler(builder, events.clone());
        builder = attach_ipc_handler(builder, events);

        let webview = builder
            .build_as_child(&*self.parent)
            .map_err(|e| RuntimeError::Rejected(e.to_string()))?;

        debug!(id = %id, partition = %partition, url = %url, "webview created");
        Ok(WrySurface {
            id,
            webview,
            scale_factor: Rc::clone(&self.scale_factor),
        })
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

fn attach_page_load_handler(builder: WebViewBuilder<'_>, events: ViewEventSender) -> WebViewBuilder<'_> {
    builder.with_on_page_load_handler(move |event, url| {
        let state = PageLoadState::from(event);
        debug!(id = %events.id(), ?state, url = %url, "page load");
        events.emit_page_load(state, url);
    })
}

fn attach_navigation_handler(builder: WebViewBuilder<'_>, events: ViewEventSender) -> WebViewBuilder<'_> {
    builder.with_navigation_handler(move |url| {
        events.emit(ViewEventKind::Navigated { url });
        true
    })
}

/// Popups never open natively; the relay decides where they go.
fn attach_new_window_handler(builder: WebViewBuilder<'_>, events: ViewEventSender) -> WebViewBuilder<'_> {
    builder.with_new_window_req_handler(move |url| {
        events.emit(ViewEventKind::NewWindowRequested { url });
        false
    })
}

fn attach_title_handler(builder: WebViewBuilder<'_>, events: ViewEventSender) -> WebViewBuilder<'_> {
    builder.with_document_title_changed_handler(move |title| {
        events.emit(ViewEventKind::TitleChanged { title });
    })
}

fn attach_ipc_handler(builder: WebViewBuilder<'_>, events: ViewEventSender) -> WebViewBuilder<'_> {
    builder.with_ipc_handler(move |request| {
        let body = request.body();
        match BridgeMessage::from_json(body) {
            Some(message) => events.emit(message.into_event()),
            None => warn!(
                id = %events.id(),
                body_len = body.len(),
                "bridge message rejected"
            ),
        }
    })
}
