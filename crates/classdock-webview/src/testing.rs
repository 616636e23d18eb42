//! Instrumented in-memory runtime for lifecycle tests.
//!
//! Every surface call lands in one shared, ordered log so tests can assert
//! on exact sequencing across views.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use async_trait::async_trait;
use classdock_common::{Rect, RuntimeError, Size, ViewId};

use crate::events::{ViewEventKind, ViewEventSender};
use crate::runtime::{EmbeddingRuntime, HostWindow, SurfaceRequest, ViewSurface};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Create(String),
    Attach(String),
    Detach(String),
    SetBounds(String, Rect),
    Focus(String),
    LoadUrl(String, String),
    Reload(String),
    RunScript(String, String),
    ExecuteScript(String, String),
    Release(String),
}

impl Call {
    pub(crate) fn id(&self) -> &str {
        match self {
            Call::Create(id)
            | Call::Attach(id)
            | Call::Detach(id)
            | Call::SetBounds(id, _)
            | Call::Focus(id)
            | Call::LoadUrl(id, _)
            | Call::Reload(id)
            | Call::RunScript(id, _)
            | Call::ExecuteScript(id, _)
            | Call::Release(id) => id,
        }
    }
}

/// Script that never resolves, for timeout tests.
pub(crate) const HANGING_SCRIPT: &str = "await new Promise(() => {})";

#[derive(Default)]
pub(crate) struct FakeState {
    log: RefCell<Vec<Call>>,
    fail_create: RefCell<HashSet<String>>,
    fail_attach: RefCell<HashSet<String>>,
    fail_detach: RefCell<HashSet<String>>,
    senders: RefCell<HashMap<String, ViewEventSender>>,
    in_flight: Cell<usize>,
    max_in_flight: Cell<usize>,
    /// Next `bounds()` read returns an empty rect.
    degenerate_read: Cell<bool>,
}

/// Cloneable handle to one fake runtime's shared state.
#[derive(Clone, Default)]
pub(crate) struct FakeRuntime {
    state: Rc<FakeState>,
}

impl FakeRuntime {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.log.borrow().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.state.log.borrow_mut().clear();
    }

    /// Calls touching `id`, in order.
    pub(crate) fn calls_for(&self, id: &str) -> Vec<Call> {
        self.calls().into_iter().filter(|c| c.id() == id).collect()
    }

    pub(crate) fn fail_create(&self, id: &str) {
        self.state.fail_create.borrow_mut().insert(id.to_string());
    }

    pub(crate) fn fail_attach(&self, id: &str) {
        self.state.fail_attach.borrow_mut().insert(id.to_string());
    }

    pub(crate) fn fail_detach(&self, id: &str) {
        self.state.fail_detach.borrow_mut().insert(id.to_string());
    }

    pub(crate) fn report_degenerate_bounds_once(&self) {
        self.state.degenerate_read.set(true);
    }

    pub(crate) fn max_in_flight(&self) -> usize {
        self.state.max_in_flight.get()
    }

    /// Emit a runtime signal as if `id`'s surface produced it.
    pub(crate) fn emit(&self, id: &str, kind: ViewEventKind) {
        if let Some(sender) = self.state.senders.borrow().get(id) {
            sender.emit(kind);
        }
    }

    /// The event sender handed to the most recent surface for `id`.
    pub(crate) fn sender(&self, id: &str) -> Option<ViewEventSender> {
        self.state.senders.borrow().get(id).cloned()
    }

    /// Whether `id` is attached according to the call log.
    pub(crate) fn is_attached(&self, id: &str) -> bool {
        let mut attached = false;
        for call in self.calls_for(id) {
            match call {
                Call::Attach(_) => attached = true,
                Call::Detach(_) | Call::Release(_) => attached = false,
                _ => {}
            }
        }
        attached
    }

    fn record(&self, call: Call) {
        self.state.log.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl EmbeddingRuntime for FakeRuntime {
    type Surface = FakeSurface;

    async fn create_surface(&self, request: SurfaceRequest) -> Result<FakeSurface, RuntimeError> {
        let in_flight = self.state.in_flight.get() + 1;
        self.state.in_flight.set(in_flight);
        self.state
            .max_in_flight
            .set(self.state.max_in_flight.get().max(in_flight));

        tokio::task::yield_now().await;

        self.state.in_flight.set(self.state.in_flight.get() - 1);

        let id = request.id.to_string();
        if self.state.fail_create.borrow().contains(&id) {
            return Err(RuntimeError::Rejected(format!("cannot create {id}")));
        }

        self.record(Call::Create(id.clone()));
        self.state
            .senders
            .borrow_mut()
            .insert(id.clone(), request.events);
        Ok(FakeSurface {
            id,
            runtime: self.clone(),
            bounds: Cell::new(request.bounds),
        })
    }
}

pub(crate) struct FakeSurface {
    id: String,
    runtime: FakeRuntime,
    bounds: Cell<Rect>,
}

impl FakeSurface {
    fn fails(&self, set: &RefCell<HashSet<String>>) -> bool {
        set.borrow().contains(&self.id)
    }
}

#[async_trait(?Send)]
impl ViewSurface for FakeSurface {
    fn attach(&self) -> Result<(), RuntimeError> {
        if self.fails(&self.runtime.state.fail_attach) {
            return Err(RuntimeError::Rejected("attach refused".into()));
        }
        self.runtime.record(Call::Attach(self.id.clone()));
        Ok(())
    }

    fn detach(&self) -> Result<(), RuntimeError> {
        if self.fails(&self.runtime.state.fail_detach) {
            return Err(RuntimeError::Rejected("detach refused".into()));
        }
        self.runtime.record(Call::Detach(self.id.clone()));
        Ok(())
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), RuntimeError> {
        self.bounds.set(bounds);
        self.runtime.record(Call::SetBounds(self.id.clone(), bounds));
        Ok(())
    }

    fn bounds(&self) -> Result<Rect, RuntimeError> {
        if self.runtime.state.degenerate_read.replace(false) {
            return Ok(Rect::default());
        }
        Ok(self.bounds.get())
    }

    fn focus(&self) -> Result<(), RuntimeError> {
        self.runtime.record(Call::Focus(self.id.clone()));
        Ok(())
    }

    fn load_url(&self, url: &str) -> Result<(), RuntimeError> {
        self.runtime
            .record(Call::LoadUrl(self.id.clone(), url.to_string()));
        Ok(())
    }

    fn reload(&self) -> Result<(), RuntimeError> {
        self.runtime.record(Call::Reload(self.id.clone()));
        Ok(())
    }

    fn run_script(&self, code: &str) -> Result<(), RuntimeError> {
        self.runtime
            .record(Call::RunScript(self.id.clone(), code.to_string()));
        Ok(())
    }

    async fn execute_script(&self, code: &str) -> Result<String, RuntimeError> {
        self.runtime
            .record(Call::ExecuteScript(self.id.clone(), code.to_string()));
        if code == HANGING_SCRIPT {
            std::future::pending::<()>().await;
        }
        Ok(serde_json::to_string(code).unwrap_or_default())
    }

    fn release(&self) {
        self.runtime.record(Call::Release(self.id.clone()));
    }
}

/// Host whose content size tests can change or remove.
#[derive(Clone)]
pub(crate) struct FakeHost {
    size: Rc<Cell<Option<Size>>>,
}

impl FakeHost {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            size: Rc::new(Cell::new(Some(Size::new(width, height)))),
        }
    }

    pub(crate) fn resize(&self, width: f64, height: f64) {
        self.size.set(Some(Size::new(width, height)));
    }

    pub(crate) fn destroy(&self) {
        self.size.set(None);
    }
}

impl HostWindow for FakeHost {
    fn content_size(&self) -> Option<Size> {
        self.size.get()
    }
}

pub(crate) fn view_id(id: &str) -> ViewId {
    ViewId::from(id)
}
