//! # sdf-config
//!
//! Layered configuration loading for sdfo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SDFO_*` prefix, `__` as separator)
//! 2. An explicit file passed by the caller (`--config`)
//! 3. Project-level `.sdfo/config.toml`
//! 4. User-level `~/.config/sdfo/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SDFO_SOURCE__BASE_URL` -> `source.base_url`,
//! `SDFO_MERGE__MAX_DEPTH` -> `merge.max_depth`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sdf_config::SdfoConfig;
//!
//! let config = SdfoConfig::load_with_dotenv().expect("config");
//! println!("fetching from {}", config.source.base_url);
//! ```

mod error;
mod merge;
mod ontology;
mod output;
mod source;

pub use error::ConfigError;
pub use merge::MergeConfig;
pub use ontology::OntologyConfig;
pub use output::OutputConfig;
pub use source::SourceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SdfoConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub merge: MergeConfig,
    #[serde(default)]
    pub ontology: OntologyConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl SdfoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be read or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering `explicit` above the discovered TOML files.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be read or a value fails
    /// validation.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be read or a value fails
    /// validation.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    fn figment_with(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".sdfo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("SDFO_").split("__"))
    }

    /// Reject values the pipeline cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.base_url.trim().is_empty() {
            return Err(invalid("source.base_url", "must not be empty"));
        }
        if self.source.concurrency == 0 {
            return Err(invalid("source.concurrency", "must be at least 1"));
        }
        if self.merge.max_depth == 0 {
            return Err(invalid("merge.max_depth", "must be at least 1"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sdfo").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
