//! Configuration loading for the `upiqr` command.
//!
//! Values come from an optional TOML file first, then from command-line
//! flags, each applied as a merge so the flags win field by field.

pub mod file;

use crate::config::file::FileConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "./upiqr.toml";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration loader for the TOML file.
pub struct ConfigLoader {
    config_path: PathBuf,
    /// Whether the path was named by the user. A missing default file is
    /// not an error; a missing named one is.
    explicit: bool,
}

impl ConfigLoader {
    /// Create a loader for `config_path`, or for [`DEFAULT_CONFIG_PATH`].
    pub fn new(config_path: Option<&Path>) -> Self {
        match config_path {
            Some(path) => Self {
                config_path: path.to_path_buf(),
                explicit: true,
            },
            None => Self {
                config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
                explicit: false,
            },
        }
    }

    /// Read and parse the configuration file.
    pub fn load(&self) -> Result<FileConfig, ConfigError> {
        let content = match std::fs::read_to_string(&self.config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !self.explicit => {
                tracing::debug!(path = ?self.config_path, "No config file, using defaults");
                return Ok(FileConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config = toml::from_str(&content)?;
        tracing::info!("Configuration loaded from {:?}", self.config_path);
        Ok(config)
    }
}
