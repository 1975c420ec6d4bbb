//! # RunSafe Tap Configuration
//!
//! Layered configuration for the tap monitor.
//!
//! ## Hierarchy
//! 1. Built-in defaults
//! 2. `config/tap.yaml`, when present
//! 3. `TAP_*` environment variables (nested keys split on `__`)
//! 4. The bare `DB_URL` variable, mapped onto `database.url`
//!
//! The environment is consulted exactly once, at load time; the resulting
//! configuration is immutable for the process lifetime.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod database;
mod error;

pub use database::DatabaseConfig;
pub use database::DEFAULT_DATABASE_URL;
pub use error::ConfigError;

/// Top-level configuration container for the tap monitor.
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct TapConfig {
    /// Audit store connection parameters.
    #[validate(nested)]
    pub database: DatabaseConfig,
}

impl TapConfig {
    /// Load configuration from the default file location and the
    /// environment. A missing `config/tap.yaml` is not an error; defaults
    /// apply.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(TapConfig::default()));

        if Path::new("config/tap.yaml").exists() {
            figment = figment.merge(Yaml::file("config/tap.yaml"));
        }

        Self::finish(figment)
    }

    /// Load configuration from a specific file, for tests and the
    /// `check-config` command. A missing file is an error here.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let figment =
            Figment::from(Serialized::defaults(TapConfig::default())).merge(Yaml::file(path));

        Self::finish(figment)
    }

    /// Applies the environment layers, extracts, and validates.
    fn finish(figment: Figment) -> Result<Self, ConfigError> {
        let mut figment = figment.merge(Env::prefixed("TAP_").split("__"));

        // DB_URL is the variable the container contract hands us; it wins
        // over every other layer.
        if let Ok(url) = std::env::var("DB_URL") {
            figment = figment.merge(Serialized::global("database.url", url));
        }

        figment
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
