/*!
# Monitor Engine

Runtime core for RunSafe Tap. The engine owns the observable contract of the
process: the startup announcement sequence, the heartbeat cadence,
interrupt-driven shutdown, and fault propagation. This abstraction lets
different frontends (CLI today) share the same implementation.
*/

pub mod engine;

pub use engine::{MonitorRuntime, TapError};
