//! # tap-core
//!
//! Foundation layer for the tap monitor: time sources and the heartbeat
//! task. Deterministic by construction so the cadence can be verified
//! without real waiting.

pub mod heartbeat;
pub mod time;

pub use heartbeat::{HeartbeatTask, HEARTBEAT_INTERVAL};
pub use time::{Clock, SystemClock, VirtualClock};

pub mod prelude {
    pub use crate::heartbeat::*;
    pub use crate::time::*;
}
