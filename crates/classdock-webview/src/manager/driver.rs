//! Serialized command loop.
//!
//! Callers that cannot hold `&mut ViewManager` send `ViewCommand`s through a
//! `ViewHandle`. `ViewManager::run` processes them one at a time, so two
//! switches can never interleave.

use classdock_common::{ViewError, ViewId};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::runtime::{EmbeddingRuntime, HostWindow, ViewOptions};

use super::host_bridge::WindowSignal;
use super::types::{InitReport, StandardApp};
use super::ViewManager;

type Reply<T> = oneshot::Sender<T>;

#[derive(Debug)]
pub enum ViewCommand {
    Create {
        id: ViewId,
        url: String,
        options: ViewOptions,
        reply: Reply<Result<(), ViewError>>,
    },
    Show {
        id: ViewId,
        reply: Reply<Result<(), ViewError>>,
    },
    Hide,
    OpenPopup {
        source: ViewId,
        url: String,
        reply: Reply<Result<ViewId, ViewError>>,
    },
    Destroy {
        id: ViewId,
        reply: Reply<bool>,
    },
    Navigate {
        id: ViewId,
        url: String,
    },
    Reload {
        id: ViewId,
    },
    GoBack {
        id: ViewId,
    },
    GoForward {
        id: ViewId,
    },
    SetSidebar {
        open: bool,
    },
    ExecuteScript {
        id: ViewId,
        code: String,
        reply: Reply<Result<String, ViewError>>,
    },
    InitializeStandardApps {
        apps: Vec<StandardApp>,
        reply: Reply<InitReport>,
    },
    Cleanup,
    Shutdown,
}

/// Why the command loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverExit {
    Shutdown,
    HostClosed,
    ChannelsClosed,
}

impl<R: EmbeddingRuntime, H: HostWindow> ViewManager<R, H> {
    /// Process commands, window signals and view events until shutdown or
    /// the host window closes.
    pub async fn run(
        &mut self,
        mut commands: mpsc::UnboundedReceiver<ViewCommand>,
        mut signals: mpsc::UnboundedReceiver<WindowSignal>,
    ) -> DriverExit {
        info!("view command loop started");
        let exit = loop {
            tokio::select! {
                Some(event) = self.events_rx.recv() => self.dispatch_event(event),
                signal = signals.recv() => match signal {
                    Some(WindowSignal::Closed) => {
                        self.handle_window_signal(WindowSignal::Closed);
                        break DriverExit::HostClosed;
                    }
                    Some(signal) => self.handle_window_signal(signal),
                    None => break DriverExit::ChannelsClosed,
                },
                command = commands.recv() => match command {
                    Some(ViewCommand::Shutdown) => break DriverExit::Shutdown,
                    Some(command) => self.execute_command(command).await,
                    None => break DriverExit::ChannelsClosed,
                },
            }
        };
        info!(?exit, "view command loop stopped");
        exit
    }

    async fn execute_command(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::Create {
                id,
                url,
                options,
                reply,
            } => {
                let result = self.create_view(id, &url, options).await.map(|_| ());
                let _ = reply.send(result);
            }
            ViewCommand::Show { id, reply } => {
                let _ = reply.send(self.show_view(&id).await);
            }
            ViewCommand::Hide => {
                if let Err(e) = self.hide_active() {
                    warn!(error = %e, "hide failed");
                }
            }
            ViewCommand::OpenPopup { source, url, reply } => {
                let _ = reply.send(self.open_popup(&source, &url).await);
            }
            ViewCommand::Destroy { id, reply } => {
                let _ = reply.send(self.destroy_view(&id));
            }
            ViewCommand::Navigate { id, url } => {
                if let Err(e) = self.navigate(&id, &url) {
                    warn!(error = %e, "navigate command failed");
                }
            }
            ViewCommand::Reload { id } => {
                if let Err(e) = self.reload(&id) {
                    warn!(error = %e, "reload command failed");
                }
            }
            ViewCommand::GoBack { id } => {
                if let Err(e) = self.go_back(&id) {
                    warn!(error = %e, "back command failed");
                }
            }
            ViewCommand::GoForward { id } => {
                if let Err(e) = self.go_forward(&id) {
                    warn!(error = %e, "forward command failed");
                }
            }
            ViewCommand::SetSidebar { open } => {
                self.set_sidebar_state(open);
            }
            ViewCommand::ExecuteScript { id, code, reply } => {
                let _ = reply.send(self.execute_script(&id, &code).await);
            }
            ViewCommand::InitializeStandardApps { apps, reply } => {
                let _ = reply.send(self.initialize_standard_apps(&apps).await);
            }
            ViewCommand::Cleanup => self.cleanup(),
            ViewCommand::Shutdown => debug!("shutdown handled by the loop"),
        }
    }
}

/// Cloneable sending side of the command loop.
#[derive(Debug, Clone)]
pub struct ViewHandle {
    commands: mpsc::UnboundedSender<ViewCommand>,
}

impl ViewHandle {
    pub fn new(commands: mpsc::UnboundedSender<ViewCommand>) -> Self {
        Self { commands }
    }

    /// A handle plus the receiver to pass to `ViewManager::run`.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ViewCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn send(&self, command: ViewCommand) -> bool {
        self.commands.send(command).is_ok()
    }

    pub async fn create(
        &self,
        id: ViewId,
        url: impl Into<String>,
        options: ViewOptions,
    ) -> Result<(), ViewError> {
        let (reply, rx) = oneshot::channel();
        let id_for_err = id.clone();
        self.send(ViewCommand::Create {
            id,
            url: url.into(),
            options,
            reply,
        });
        rx.await
            .unwrap_or_else(|_| Err(ViewError::creation(&id_for_err, "view loop stopped")))
    }

    pub async fn show(&self, id: ViewId) -> Result<(), ViewError> {
        let (reply, rx) = oneshot::channel();
        let id_for_err = id.clone();
        self.send(ViewCommand::Show { id, reply });
        rx.await
            .unwrap_or_else(|_| Err(ViewError::attach(&id_for_err, "view loop stopped")))
    }

    pub fn hide(&self) {
        self.send(ViewCommand::Hide);
    }

    pub async fn open_popup(
        &self,
        source: ViewId,
        url: impl Into<String>,
    ) -> Result<ViewId, ViewError> {
        let (reply, rx) = oneshot::channel();
        let id_for_err = source.clone();
        self.send(ViewCommand::OpenPopup {
            source,
            url: url.into(),
            reply,
        });
        rx.await
            .unwrap_or_else(|_| Err(ViewError::creation(&id_for_err, "view loop stopped")))
    }

    pub async fn destroy(&self, id: ViewId) -> bool {
        let (reply, rx) = oneshot::channel();
        self.send(ViewCommand::Destroy { id, reply });
        rx.await.unwrap_or(false)
    }

    pub fn navigate(&self, id: ViewId, url: impl Into<String>) {
        self.send(ViewCommand::Navigate {
            id,
            url: url.into(),
        });
    }

    pub fn reload(&self, id: ViewId) {
        self.send(ViewCommand::Reload { id });
    }

    pub fn go_back(&self, id: ViewId) {
        self.send(ViewCommand::GoBack { id });
    }

    pub fn go_forward(&self, id: ViewId) {
        self.send(ViewCommand::GoForward { id });
    }

    pub fn set_sidebar(&self, open: bool) {
        self.send(ViewCommand::SetSidebar { open });
    }

    pub async fn execute_script(
        &self,
        id: ViewId,
        code: impl Into<String>,
    ) -> Result<String, ViewError> {
        let (reply, rx) = oneshot::channel();
        let id_for_err = id.clone();
        self.send(ViewCommand::ExecuteScript {
            id,
            code: code.into(),
            reply,
        });
        rx.await
            .unwrap_or_else(|_| Err(ViewError::script(&id_for_err, "view loop stopped")))
    }

    pub async fn initialize_standard_apps(&self, apps: Vec<StandardApp>) -> InitReport {
        let (reply, rx) = oneshot::channel();
        self.send(ViewCommand::InitializeStandardApps { apps, reply });
        rx.await.unwrap_or_default()
    }

    pub fn shutdown(&self) {
        self.send(ViewCommand::Shutdown);
    }
}
