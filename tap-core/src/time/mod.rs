//! ## tap-core::time
//! **Wall and virtual clocks**
//!
//! ### Expectations:
//! - Nanosecond resolution
//! - Deterministic under test: virtual time advances only through `sleep`
//! - Lock-free operations
//!
//! The heartbeat task is generic over [`Clock`], so production runs against
//! the tokio timer while tests drive a [`VirtualClock`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;

/// Time source for the monitor loop.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current time in nanoseconds.
    fn now_ns(&self) -> u64;

    /// Suspends the calling task for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Wall-clock time backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now_ns(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before Unix epoch")
            .as_nanos() as u64
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// A deterministic clock over an atomic nanosecond counter.
///
/// Cloning shares the counter: time advanced through one handle is visible
/// through every clone. `sleep` completes immediately after advancing,
/// yielding once so sibling tasks get polled.
#[derive(Debug, Clone)]
pub struct VirtualClock {
    offset: Arc<AtomicU64>,
}

impl VirtualClock {
    /// Creates a virtual clock starting at `seed` nanoseconds.
    pub fn new(seed: u64) -> Self {
        Self {
            offset: Arc::new(AtomicU64::new(seed)),
        }
    }

    /// Advances the clock by `ns` nanoseconds.
    pub fn advance(&self, ns: u64) {
        self.offset.fetch_add(ns, Ordering::Release);
    }
}

#[async_trait]
impl Clock for VirtualClock {
    fn now_ns(&self) -> u64 {
        self.offset.load(Ordering::Acquire)
    }

    async fn sleep(&self, duration: Duration) {
        self.advance(duration.as_nanos() as u64);
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_clock_starts_at_seed() {
        let clock = VirtualClock::new(100);
        assert_eq!(clock.now_ns(), 100);
    }

    #[test]
    fn virtual_clock_advance_accumulates() {
        let clock = VirtualClock::new(0);
        clock.advance(500);
        clock.advance(250);
        assert_eq!(clock.now_ns(), 750);
    }

    #[test]
    fn clones_share_the_counter() {
        let clock = VirtualClock::new(0);
        let handle = clock.clone();
        handle.advance(42);
        assert_eq!(clock.now_ns(), 42);
    }

    #[tokio::test]
    async fn virtual_sleep_advances_by_the_full_duration() {
        let clock = VirtualClock::new(0);
        clock.sleep(Duration::from_secs(60)).await;
        assert_eq!(clock.now_ns(), 60_000_000_000);
    }
}
