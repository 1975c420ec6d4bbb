//! # RunSafe Tap Telemetry
//!
//! Logging and in-process metrics for the tap monitor.

pub mod logging;
pub mod metrics;

pub use logging::{EventLogger, TelemetryError};
pub use metrics::MetricsRecorder;
