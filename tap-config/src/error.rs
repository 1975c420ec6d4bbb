//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;
use validator::ValidationErrors;

/// Unified configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicitly requested file does not exist.
    #[error("configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Loaded configuration failed validation.
    #[error("invalid configuration: {}", describe(.0))]
    Invalid(#[source] ValidationErrors),

    /// Figment parsing or extraction error.
    #[error("configuration parsing error: {0}")]
    Parsing(#[from] figment::Error),
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        ConfigError::Invalid(errors)
    }
}

// Flattened to `field: message; field: message` so the failure fits the
// one-line log contract.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            let message = match &error.message {
                Some(msg) => msg.to_string(),
                None => error.code.to_string(),
            };
            parts.push(format!("{field}: {message}"));
        }
    }
    parts.join("; ")
}
