//! Application configuration.
//!
//! Settings are read from an optional TOML file; every key has a default so a
//! partial file (or none at all) is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "artemis-tachi.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the ARTEMiS SQLite database
    pub database: PathBuf,
    /// Directory export files are written to
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from("aime.db"),
            export_dir: PathBuf::from("exports"),
        }
    }
}

impl Config {
    /// Create a new configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&content)?;
        debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }
}

/// Builder for Config
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    base: Option<Config>,
    database: Option<PathBuf>,
    export_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Start from an already loaded configuration instead of the defaults
    pub fn base(mut self, config: Config) -> Self {
        self.base = Some(config);
        self
    }

    /// Set the database path
    pub fn database<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.database = Some(path.into());
        self
    }

    /// Set the export directory
    pub fn export_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.export_dir = Some(path.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        let base = self.base.unwrap_or_default();
        Config {
            database: self.database.unwrap_or(base.database),
            export_dir: self.export_dir.unwrap_or(base.export_dir),
        }
    }
}
