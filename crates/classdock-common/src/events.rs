use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::id::ViewId;

/// Outward notification for the host UI, tagged with the originating view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Notification {
    Loading {
        id: ViewId,
        loading: bool,
    },
    Loaded {
        id: ViewId,
        url: String,
    },
    Navigated {
        id: ViewId,
        url: String,
    },
    Error {
        id: ViewId,
        code: i32,
        description: String,
        url: String,
    },
    Activated {
        id: Option<ViewId>,
    },
    /// A page in `id` asked to open `url` in a new window.
    NewWindowRequested {
        id: ViewId,
        url: String,
    },
    ContextMenu {
        id: ViewId,
        selection_text: String,
        x: f64,
        y: f64,
    },
    TitleChanged {
        id: ViewId,
        title: String,
    },
}

/// Fire-and-forget fan-out of notifications to every UI subscriber.
///
/// Slow subscribers lose the oldest messages.
pub struct NotificationBus {
    sender: broadcast::Sender<Notification>,
}

impl NotificationBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers that received the notification.
    pub fn publish(&self, notification: Notification) -> usize {
        self.sender.send(notification).unwrap_or(0)
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new(64)
    }
}
