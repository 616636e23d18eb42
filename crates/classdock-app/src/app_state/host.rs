//! The winit window as a view host.

use std::sync::{Arc, Weak};

use classdock_common::Size;
use classdock_webview::HostWindow;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::window::Window;

/// Reports the content area of a window it does not keep alive.
pub struct WinitHost {
    window: Weak<Window>,
}

impl WinitHost {
    pub fn new(window: &Arc<Window>) -> Self {
        Self {
            window: Arc::downgrade(window),
        }
    }
}

impl HostWindow for WinitHost {
    fn content_size(&self) -> Option<Size> {
        let window = self.window.upgrade()?;
        Some(logical_size(window.inner_size(), window.scale_factor()))
    }
}

pub(super) fn logical_size(physical: PhysicalSize<u32>, scale_factor: f64) -> Size {
    let logical: LogicalSize<f64> = physical.to_logical(scale_factor);
    Size::new(logical.width, logical.height)
}
