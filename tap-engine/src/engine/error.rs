use thiserror::Error;

use tap_config::ConfigError;

/// Process-level error type for the tap monitor.
///
/// Faults are never retried or suppressed; whatever reaches this type is
/// logged once at the outermost frame and propagated, terminating the
/// process with a non-zero status.
#[derive(Debug, Error)]
pub enum TapError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
