use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::ThuxConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config from {origin}: {source}")]
    ParseError {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

impl ThuxConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Unlike application config, a missing file is an error here: callers
    /// that want defaults use `ThuxConfig::default()` directly.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            origin: format!("'{}'", path.display()),
            source: e,
        })
    }

    /// Parses configuration from an in-memory TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            origin: "inline TOML".to_string(),
            source: e,
        })
    }
}
