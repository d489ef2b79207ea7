//! config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$REPOLENS_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/repolens/config.toml`
//! 3. `~/.repolens/config.toml`
//!
//! Missing config files are not an error; defaults (no instance
//! overrides) are used.
//!
//! # Example
//!
//! ```no_run
//! use repolens::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("{} instance overrides", config.global.instances.len());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, InstanceConfig};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The parsed configuration.
    pub global: GlobalConfig,
    /// Path to the config file (if one was loaded).
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read,
    /// parsed, or validated. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        // 1. $REPOLENS_CONFIG
        if let Ok(path) = std::env::var("REPOLENS_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        // 2. $XDG_CONFIG_HOME/repolens/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("repolens/config.toml");
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        // 3. ~/.repolens/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".repolens/config.toml");
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load and validate configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        global.validate()?;

        Ok(Self {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Get the path the configuration was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [[instances]]
            host = "github.example.com"
            api_base_url = "https://github.example.com/api/v3"
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.global.instances.len(), 1);
        assert_eq!(config.global.instances[0].host, "github.example.com");
        assert_eq!(config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn load_from_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.toml");

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ReadError { .. })
        ));
    }

    #[test]
    fn load_from_invalid_toml_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "not [valid").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn load_from_invalid_value_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [[instances]]
            host = ""
            "#,
        )
        .unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue(_))
        ));
    }
}
