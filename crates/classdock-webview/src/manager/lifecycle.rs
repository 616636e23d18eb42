use classdock_common::{Notification, ViewError, ViewId};
use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::events::ViewEventSender;
use crate::runtime::{EmbeddingRuntime, HostWindow, SurfaceRequest, ViewOptions, ViewSurface};

use super::types::{InitReport, ManagedView, StandardApp};
use super::ViewManager;

impl<R: EmbeddingRuntime, H: HostWindow> ViewManager<R, H> {
    /// Create a detached view that starts loading `url`.
    ///
    /// Idempotent: an existing view with the same id is returned unchanged.
    pub async fn create_view(
        &mut self,
        id: ViewId,
        url: &str,
        options: ViewOptions,
    ) -> Result<&ManagedView<R::Surface>, ViewError> {
        if self.registry.contains(&id) {
            debug!(id = %id, "view already exists, reusing");
        } else {
            let view = self.build_view(id.clone(), url, options, false).await?;
            self.registry.insert(view);
            info!(id = %id, url = %url, "view created");
        }
        self.registry.get(&id).ok_or(ViewError::NotFound(id))
    }

    /// Open `url` from a link in `source` as a popup view and show it.
    ///
    /// The popup shares `source`'s storage partition so the page keeps the
    /// signed-in session. It is destroyed as soon as it is hidden.
    pub async fn open_popup(&mut self, source: &ViewId, url: &str) -> Result<ViewId, ViewError> {
        let partition = self
            .registry
            .get(source)
            .map(|view| view.partition.clone())
            .ok_or_else(|| ViewError::NotFound(source.clone()))?;

        let id = ViewId::generated("popup");
        let options = ViewOptions {
            partition: Some(partition),
            ..ViewOptions::default()
        };
        self.create_view(id.clone(), url, options).await?;
        self.popups.insert(id.clone());

        if let Err(e) = self.show_view(&id).await {
            self.destroy_view(&id);
            return Err(e);
        }
        info!(id = %id, source = %source, url = %url, "popup opened");
        Ok(id)
    }

    pub fn is_popup(&self, id: &ViewId) -> bool {
        self.popups.contains(id)
    }

    /// Ask the runtime for a surface. Touches nothing but the runtime, so
    /// several of these can be in flight at once.
    async fn build_view(
        &self,
        id: ViewId,
        url: &str,
        options: ViewOptions,
        is_standard_app: bool,
    ) -> Result<ManagedView<R::Surface>, ViewError> {
        if url.trim().is_empty() {
            return Err(ViewError::creation(&id, "empty url"));
        }

        let generation = self.allocate_generation();
        let partition = options.partition_for(&id);
        let request = SurfaceRequest {
            id: id.clone(),
            url: url.to_string(),
            options,
            bounds: self.current_bounds().unwrap_or_default(),
            events: ViewEventSender::new(id.clone(), generation, self.events_tx.clone()),
        };

        let surface = self.runtime.create_surface(request).await.map_err(|e| {
            warn!(id = %id, error = %e, "runtime refused to create view");
            ViewError::creation(&id, e)
        })?;

        Ok(ManagedView::new(id, surface, url.to_string(), is_standard_app)
            .with_origin(generation, partition))
    }

    /// Detach if active, release the surface and forget the view.
    /// Returns `false` when no such view exists.
    pub fn destroy_view(&mut self, id: &ViewId) -> bool {
        if self.active.as_ref() == Some(id) {
            if let Some(view) = self.registry.get(id) {
                if let Err(e) = view.surface.detach() {
                    warn!(id = %id, error = %e, "detach before destroy failed");
                }
            }
            self.active = None;
            self.emit(Notification::Activated { id: None });
        }

        self.popups.remove(id);
        match self.registry.remove(id) {
            Some(view) => {
                view.surface.release();
                info!(id = %id, "view destroyed");
                true
            }
            None => {
                debug!(id = %id, "destroy of unknown view ignored");
                false
            }
        }
    }

    /// Create every visible standard app that does not exist yet, at most
    /// `max_concurrent_creates` at a time.
    ///
    /// One app failing does not affect the others. A second call after the
    /// manager is initialized does nothing.
    pub async fn initialize_standard_apps(&mut self, apps: &[StandardApp]) -> InitReport {
        let mut report = InitReport::default();
        if self.initialized {
            debug!("standard apps already initialized");
            return report;
        }

        let mut pending: Vec<&StandardApp> = Vec::new();
        for app in apps {
            let duplicate = pending.iter().any(|p| p.id == app.id);
            if !app.visible || duplicate || self.registry.contains(&app.id) {
                report.skipped.push(app.id.clone());
                continue;
            }
            pending.push(app);
        }

        let limit = self.max_concurrent_creates;
        let results: Vec<Result<ManagedView<R::Surface>, ViewError>> = {
            let this = &*self;
            stream::iter(pending.into_iter().map(move |app| {
                this.build_view(app.id.clone(), &app.url, ViewOptions::default(), true)
            }))
            .buffered(limit)
            .collect()
            .await
        };

        for result in results {
            match result {
                Ok(view) => {
                    let id = view.id.clone();
                    if self.registry.insert(view) {
                        report.created.push(id);
                    }
                }
                Err(e) => {
                    warn!(id = %e.view_id(), error = %e, "standard app failed to start");
                    report.failed.push(e);
                }
            }
        }

        self.initialized = true;
        info!(
            created = report.created.len(),
            failed = report.failed.len(),
            skipped = report.skipped.len(),
            "standard apps initialized"
        );
        report
    }

    /// Detach the active view, release every surface and reset to the
    /// uninitialized state.
    pub fn cleanup(&mut self) {
        if let Some(active) = self.active.take() {
            if let Some(view) = self.registry.get(&active) {
                if let Err(e) = view.surface.detach() {
                    warn!(id = %active, error = %e, "detach during cleanup failed");
                }
            }
            self.emit(Notification::Activated { id: None });
        }

        self.popups.clear();
        let views = self.registry.drain();
        let count = views.len();
        for view in views {
            view.surface.release();
        }
        self.initialized = false;
        info!(count, "all views released");
    }
}
