pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, RuntimeError, ViewError};
pub use events::{Notification, NotificationBus};
pub use id::ViewId;
pub use types::{Rect, Size};
