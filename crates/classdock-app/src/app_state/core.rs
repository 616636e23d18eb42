//! ClassdockApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use classdock_common::Notification;
use classdock_config::ClassdockConfig;
use tokio::sync::broadcast;
use winit::window::Window;

use super::types::Views;

/// Top-level application state.
pub struct ClassdockApp {
    pub(super) config: ClassdockConfig,
    /// Current-thread runtime that drives view operations on the main thread.
    pub(super) runtime: tokio::runtime::Runtime,
    /// `--app` override for the first view shown.
    pub(super) initial_app: Option<String>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) was_maximized: bool,

    // Embedded views
    pub(super) views: Option<Views>,
    pub(super) notifications: Option<broadcast::Receiver<Notification>>,
    /// Label of the active app, shown in the window title.
    pub(super) active_label: Option<String>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl ClassdockApp {
    pub fn new(
        config: ClassdockConfig,
        runtime: tokio::runtime::Runtime,
        initial_app: Option<String>,
    ) -> Self {
        Self {
            config,
            runtime,
            initial_app,
            window: None,
            was_maximized: false,
            views: None,
            notifications: None,
            active_label: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}

#[cfg(test)]
pub(super) fn test_app() -> ClassdockApp {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    ClassdockApp::new(ClassdockConfig::default(), runtime, None)
}
