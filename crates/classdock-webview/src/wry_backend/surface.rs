use std::cell::Cell;
use std::rc::Rc;
use std::sync::Mutex;

use async_trait::async_trait;
use classdock_common::{Rect, RuntimeError, ViewId};
use tokio::sync::oneshot;
use tracing::debug;
use wry::WebView;

use crate::runtime::ViewSurface;

use super::bounds::{from_wry, to_wry};

fn rejected(e: wry::Error) -> RuntimeError {
    RuntimeError::Rejected(e.to_string())
}

/// A child `wry::WebView`. Attached means visible.
pub struct WrySurface {
    pub(super) id: ViewId,
    pub(super) webview: WebView,
    pub(super) scale_factor: Rc<Cell<f64>>,
}

impl WrySurface {
    pub fn inner(&self) -> &WebView {
        &self.webview
    }

    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }
}

#[async_trait(?Send)]
impl ViewSurface for WrySurface {
    fn attach(&self) -> Result<(), RuntimeError> {
        self.webview.set_visible(true).map_err(rejected)
    }

    fn detach(&self) -> Result<(), RuntimeError> {
        self.webview.set_visible(false).map_err(rejected)?;
        // Keyboard focus must not stay in a hidden view.
        self.webview.focus_parent().map_err(rejected)
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), RuntimeError> {
        self.webview.set_bounds(to_wry(&bounds)).map_err(rejected)
    }

    fn bounds(&self) -> Result<Rect, RuntimeError> {
        let rect = self.webview.bounds().map_err(rejected)?;
        Ok(from_wry(&rect, self.scale_factor.get()))
    }

    fn focus(&self) -> Result<(), RuntimeError> {
        self.webview.focus().map_err(rejected)
    }

    fn load_url(&self, url: &str) -> Result<(), RuntimeError> {
        self.webview.load_url(url).map_err(rejected)
    }

    fn reload(&self) -> Result<(), RuntimeError> {
        self.webview
            .evaluate_script("window.location.reload();")
            .map_err(rejected)
    }

    fn run_script(&self, code: &str) -> Result<(), RuntimeError> {
        self.webview.evaluate_script(code).map_err(rejected)
    }

    /// Resolves once the main loop delivers the callback. Never block the
    /// event loop thread on this.
    async fn execute_script(&self, code: &str) -> Result<String, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        let slot = Mutex::new(Some(tx));
        self.webview
            .evaluate_script_with_callback(code, move |result| {
                if let Some(tx) = slot.lock().ok().and_then(|mut s| s.take()) {
                    let _ = tx.send(result);
                }
            })
            .map_err(rejected)?;

        rx.await
            .map_err(|_| RuntimeError::Rejected("script callback dropped".into()))
    }

    fn release(&self) {
        let _ = self.webview.set_visible(false);
        let _ = self.webview.load_url("about:blank");
        debug!(id = %self.id, "webview released");
    }
}
