//! Window creation and view manager setup.

use std::path::PathBuf;
use std::sync::Arc;

use classdock_common::ViewId;
use classdock_config::schema::TimingConfig;
use classdock_config::ClassdockConfig;
use classdock_webview::{
    EventRelay, ExternalLinkPolicy, ManagerConfig, NoSettle, SidebarState, StandardApp,
    SystemOpener, TimedSettle, ViewManager, WryRuntime,
};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::core::ClassdockApp;
use super::host::WinitHost;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl ClassdockApp {
    /// Create the window and the view manager, then start the standard apps.
    /// Returns `false` if the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let wc = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(wc.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(wc.width),
                f64::from(wc.height),
            ))
            .with_maximized(wc.start_maximized);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!(error = %e, "failed to create window");
                return false;
            }
        };

        self.was_maximized = window.is_maximized();
        self.initialize_views(&window);
        self.window = Some(window);
        tracing::info!("Window created and views initialized");
        true
    }

    fn initialize_views(&mut self, window: &Arc<Window>) {
        let runtime = WryRuntime::new(
            Arc::clone(window),
            partition_root(),
            window.scale_factor(),
        );
        let relay = EventRelay::new(external_policy(&self.config), Box::new(SystemOpener));
        let views = ViewManager::new(runtime, WinitHost::new(window), manager_config(&self.config))
            .with_relay(relay);
        let mut views = match timed_settle(&self.config.timing) {
            Some(settle) => {
                tracing::info!(?settle, "switch settle waits enabled");
                views.with_settle(settle)
            }
            None => views.with_settle(NoSettle),
        };
        self.notifications = Some(views.subscribe());

        let apps = standard_apps(&self.config);
        let report = self.runtime.block_on(views.initialize_standard_apps(&apps));
        for failure in &report.failed {
            tracing::warn!(error = %failure, "app unavailable");
        }

        if let Some(id) = initial_app_id(self.initial_app.as_deref(), &self.config) {
            if let Err(e) = self.runtime.block_on(views.show_view(&id)) {
                tracing::warn!(id = %id, error = %e, "failed to show initial app");
            }
        }

        self.views = Some(views);
    }
}

// =============================================================================
// CONFIG MAPPING
// =============================================================================

/// Root directory for per-partition browser data.
fn partition_root() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("classdock")
        .join("partitions")
}

pub(super) fn manager_config(config: &ClassdockConfig) -> ManagerConfig {
    ManagerConfig {
        header_height: config.layout.header_height,
        sidebar: SidebarState::new(config.layout.sidebar_open, config.layout.sidebar_width),
        max_concurrent_creates: config.startup.max_concurrent_creates as usize,
        ..ManagerConfig::default()
    }
}

/// Settle waits block the event loop thread, so they are only used when
/// configured.
pub(super) fn timed_settle(timing: &TimingConfig) -> Option<TimedSettle> {
    if timing.detach_settle_ms == 0 && timing.attach_settle_ms == 0 {
        return None;
    }
    Some(TimedSettle::from_millis(
        timing.detach_settle_ms,
        timing.attach_settle_ms,
    ))
}

pub(super) fn standard_apps(config: &ClassdockConfig) -> Vec<StandardApp> {
    config
        .apps
        .iter()
        .map(|app| StandardApp {
            id: ViewId::from(app.id.as_str()),
            url: app.url.clone(),
            visible: app.visible,
        })
        .collect()
}

pub(super) fn external_policy(config: &ClassdockConfig) -> ExternalLinkPolicy {
    ExternalLinkPolicy::new(&config.external_links.patterns).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid external link pattern, keeping all links in the shell");
        ExternalLinkPolicy::none()
    })
}

/// First view to show: the CLI override, then `startup.initial_app`, then
/// the first visible app. Unknown or hidden ids are ignored.
pub(super) fn initial_app_id(cli: Option<&str>, config: &ClassdockConfig) -> Option<ViewId> {
    let visible = |id: &str| config.app(id).is_some_and(|app| app.visible);

    cli.filter(|id| visible(id))
        .or_else(|| {
            config
                .startup
                .initial_app
                .as_deref()
                .filter(|id| visible(id))
        })
        .or_else(|| config.apps.iter().find(|app| app.visible).map(|app| app.id.as_str()))
        .map(ViewId::from)
}

// =============================================================================
// TESTS
// =============================================================================
