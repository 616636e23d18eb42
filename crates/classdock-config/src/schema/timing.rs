//! Settling intervals around view attachment.

use serde::{Deserialize, Serialize};

/// Fixed waits that bridge embedding-runtime paint races during a switch.
///
/// Off by default: switches run on the window's event loop thread, so a
/// nonzero wait blocks painting for its whole duration. Only the
/// detach-before-attach ordering is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Wait after detaching the previous view (valid range: 0-2000 ms).
    pub detach_settle_ms: u64,
    /// Wait after attaching the new view, before focusing (valid range: 0-2000 ms).
    pub attach_settle_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            detach_settle_ms: 0,
            attach_settle_ms: 0,
        }
    }
}
