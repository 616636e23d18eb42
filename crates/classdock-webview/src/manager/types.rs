use chrono::{DateTime, Utc};
use classdock_common::{ViewError, ViewId};
use serde::Serialize;

use crate::events::ViewEventKind;

/// Load state of a managed view. Attachment is tracked separately by the
/// manager's active pointer.
///
/// A view is `Created` from registration until its runtime reports the
/// first load signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    Loading,
    Ready,
}

/// One embedded browsing surface and what the shell knows about it.
pub struct ManagedView<S> {
    pub(crate) id: ViewId,
    pub(crate) surface: S,
    pub(crate) is_standard_app: bool,
    pub(crate) current_url: String,
    pub(crate) title: String,
    pub(crate) state: ViewState,
    pub(crate) created_at: DateTime<Utc>,
    /// Surface instance this record belongs to; see `ViewEvent::generation`.
    pub(crate) generation: u64,
    pub(crate) partition: String,
}

impl<S> ManagedView<S> {
    pub(crate) fn new(id: ViewId, surface: S, url: String, is_standard_app: bool) -> Self {
        Self {
            partition: format!("persist:{id}"),
            id,
            surface,
            is_standard_app,
            current_url: url,
            title: String::new(),
            state: ViewState::Created,
            created_at: Utc::now(),
            generation: 0,
        }
    }

    pub(crate) fn with_origin(mut self, generation: u64, partition: String) -> Self {
        self.generation = generation;
        self.partition = partition;
        self
    }

    pub fn id(&self) -> &ViewId {
        &self.id
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_standard_app(&self) -> bool {
        self.is_standard_app
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Storage partition the surface was created in.
    pub fn partition(&self) -> &str {
        &self.partition
    }

    /// Fold a runtime signal into the tracked location, title and state.
    pub(crate) fn apply_event(&mut self, kind: &ViewEventKind) {
        match kind {
            ViewEventKind::LoadStarted => self.state = ViewState::Loading,
            ViewEventKind::LoadStopped => self.state = ViewState::Ready,
            ViewEventKind::LoadFinished { url } => {
                self.state = ViewState::Ready;
                if !url.is_empty() {
                    self.current_url = url.clone();
                }
            }
            ViewEventKind::Navigated { url } => {
                if !url.is_empty() {
                    self.current_url = url.clone();
                }
            }
            ViewEventKind::TitleChanged { title } => self.title = title.clone(),
            ViewEventKind::LoadFailed { .. }
            | ViewEventKind::NewWindowRequested { .. }
            | ViewEventKind::ContextMenu { .. } => {}
        }
    }
}

impl<S> std::fmt::Debug for ManagedView<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagedView")
            .field("id", &self.id)
            .field("is_standard_app", &self.is_standard_app)
            .field("current_url", &self.current_url)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Snapshot for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewStats {
    pub count: usize,
    pub active_id: Option<ViewId>,
    pub initialized: bool,
}

/// A bundled service to create at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardApp {
    pub id: ViewId,
    pub url: String,
    pub visible: bool,
}

impl StandardApp {
    pub fn new(id: impl Into<ViewId>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            visible: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Outcome of bulk startup creation.
#[derive(Debug, Default)]
pub struct InitReport {
    /// Ids created by this call.
    pub created: Vec<ViewId>,
    /// Per-app failures; other apps were unaffected.
    pub failed: Vec<ViewError>,
    /// Ids that already existed or were not visible.
    pub skipped: Vec<ViewId>,
}

impl InitReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
