//! Settling waits around a view switch.
//!
//! Some embedding runtimes render blank when a surface is attached right
//! after another was detached, or when focus arrives before the first paint.
//! The manager calls these hooks at fixed points of the switch; only their
//! position in the sequence is protocol, not their duration.

use std::time::Duration;

use async_trait::async_trait;

#[async_trait(?Send)]
pub trait SettleStrategy {
    /// Runs after the previous view is detached, before the next attach.
    async fn after_detach(&self);
    /// Runs after the new view is attached and bounded, before focus.
    async fn after_attach(&self);
}

/// Fixed sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedSettle {
    pub detach: Duration,
    pub attach: Duration,
}

impl TimedSettle {
    pub fn from_millis(detach_ms: u64, attach_ms: u64) -> Self {
        Self {
            detach: Duration::from_millis(detach_ms),
            attach: Duration::from_millis(attach_ms),
        }
    }
}

impl Default for TimedSettle {
    fn default() -> Self {
        Self::from_millis(50, 150)
    }
}

#[async_trait(?Send)]
impl SettleStrategy for TimedSettle {
    async fn after_detach(&self) {
        if !self.detach.is_zero() {
            tokio::time::sleep(self.detach).await;
        }
    }

    async fn after_attach(&self) {
        if !self.attach.is_zero() {
            tokio::time::sleep(self.attach).await;
        }
    }
}

/// For runtimes that attach synchronously.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSettle;

#[async_trait(?Send)]
impl SettleStrategy for NoSettle {
    async fn after_detach(&self) {}
    async fn after_attach(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn timed_settle_waits_configured_durations() {
        let settle = TimedSettle::from_millis(50, 150);

        let start = Instant::now();
        settle.after_detach().await;
        assert_eq!(start.elapsed(), Duration::from_millis(50));

        let start = Instant::now();
        settle.after_attach().await;
        assert_eq!(start.elapsed(), Duration::from_millis(150));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_durations_do_not_touch_the_timer() {
        let settle = TimedSettle::from_millis(0, 0);
        let start = Instant::now();
        settle.after_detach().await;
        settle.after_attach().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn no_settle_returns_immediately() {
        let start = Instant::now();
        NoSettle.after_detach().await;
        NoSettle.after_attach().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[test]
    fn default_is_fifty_and_one_fifty() {
        let settle = TimedSettle::default();
        assert_eq!(settle.detach, Duration::from_millis(50));
        assert_eq!(settle.attach, Duration::from_millis(150));
    }
}
