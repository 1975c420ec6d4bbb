//! Fixed-interval heartbeat task.
//!
//! One periodic task with one scheduling rule: emit a tick, then sleep the
//! full interval. No jitter, no catch-up for missed ticks.

use std::ops::ControlFlow;
use std::time::Duration;

use crate::time::Clock;

/// Cadence of the monitor heartbeat. Fixed; not configuration-exposed.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(60);

/// Periodic task driving the monitor's heartbeat log line.
pub struct HeartbeatTask<C: Clock> {
    clock: C,
    interval: Duration,
}

impl<C: Clock> HeartbeatTask<C> {
    /// Heartbeat at the fixed [`HEARTBEAT_INTERVAL`].
    pub fn new(clock: C) -> Self {
        Self::with_interval(clock, HEARTBEAT_INTERVAL)
    }

    /// Heartbeat at an explicit interval.
    pub fn with_interval(clock: C, interval: Duration) -> Self {
        Self { clock, interval }
    }

    /// Runs the heartbeat: `tick` fires immediately, then once per interval.
    ///
    /// Returns when `tick` breaks. In production the callback never breaks;
    /// the future is dropped by the shutdown race instead.
    pub async fn run<F>(&self, mut tick: F)
    where
        F: FnMut() -> ControlFlow<()>,
    {
        loop {
            if tick().is_break() {
                return;
            }
            self.clock.sleep(self.interval).await;
        }
    }
}
