//! Per-view lifecycle signals reported by the embedding runtime.

use classdock_common::ViewId;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// One signal from one view.
///
/// `generation` identifies the surface that produced it, so signals from a
/// destroyed surface never land on a later view reusing the same id.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEvent {
    pub id: ViewId,
    pub generation: u64,
    pub kind: ViewEventKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEventKind {
    LoadStarted,
    LoadStopped,
    /// Main frame finished loading; carries the resolved URL.
    LoadFinished { url: String },
    Navigated { url: String },
    LoadFailed {
        code: i32,
        description: String,
        url: String,
    },
    /// Page asked to open a new window (target=_blank, window.open).
    NewWindowRequested { url: String },
    /// Context menu opened over a text selection, in screen coordinates.
    ContextMenu {
        selection_text: String,
        x: f64,
        y: f64,
    },
    TitleChanged { title: String },
}

/// Sending half of the shared event stream, bound to one surface.
///
/// Runtime callbacks hold clones of this; sends after the manager is gone
/// are dropped silently.
#[derive(Debug, Clone)]
pub struct ViewEventSender {
    id: ViewId,
    generation: u64,
    tx: mpsc::UnboundedSender<ViewEvent>,
}

impl ViewEventSender {
    pub fn new(id: ViewId, generation: u64, tx: mpsc::UnboundedSender<ViewEvent>) -> Self {
        Self { id, generation, tx }
    }

    pub fn id(&self) -> &ViewId {
        &self.id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn emit(&self, kind: ViewEventKind) {
        let _ = self.tx.send(ViewEvent {
            id: self.id.clone(),
            generation: self.generation,
            kind,
        });
    }

    /// Translate a wry page-load callback into start/finish signals.
    pub fn emit_page_load(&self, state: PageLoadState, url: String) {
        match state {
            PageLoadState::Started => self.emit(ViewEventKind::LoadStarted),
            PageLoadState::Finished => {
                self.emit(ViewEventKind::LoadFinished { url });
                self.emit(ViewEventKind::LoadStopped);
            }
        }
    }
}
