//! Internal types and constants for the app state module.

use std::time::Duration;

use classdock_webview::{ViewManager, WryRuntime};
use winit::window::Window;

use super::host::WinitHost;

/// The view manager as wired into a winit window.
pub(super) type Views = ViewManager<WryRuntime<Window>, WinitHost>;

/// How often to pump view events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);
