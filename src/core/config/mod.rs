//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$COLORCHECK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/colorcheck/config.toml`
//! 3. `~/.colorcheck/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use colorcheck::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Scan mode: {:?}", config.scan_mode());
//! println!("Warn on asymmetric arcs: {}", config.warn_asymmetric());
//! ```

pub mod schema;

pub use schema::Settings;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::instance::{InstanceError, Preset};
use crate::core::validate::ScanMode;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "COLORCHECK_CONFIG";

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
///
/// Accessors apply defaults for anything the file leaves unset.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings
    pub settings: Settings,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    /// A missing config file is not an error (defaults are used).
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_first(&Self::search_paths())
    }

    /// Load the first existing file among `candidates`.
    pub fn load_first(candidates: &[PathBuf]) -> Result<Config, ConfigError> {
        match candidates.iter().find(|path| path.exists()) {
            Some(path) => Self::load_from(path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let settings = Self::read_settings(path)?;
        settings.validate()?;
        Ok(Config {
            settings,
            path: Some(path.to_path_buf()),
        })
    }

    /// Candidate config file locations, in precedence order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            paths.push(PathBuf::from(path));
        }
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_home).join("colorcheck/config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".colorcheck/config.toml"));
        }

        paths
    }

    /// Read and parse a config file.
    fn read_settings(path: &Path) -> Result<Settings, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the conflict reporting mode.
    ///
    /// Defaults to `ScanMode::FirstConflict` if not configured.
    pub fn scan_mode(&self) -> ScanMode {
        self.settings.scan.unwrap_or_default()
    }

    /// Check if asymmetric arcs should be reported.
    ///
    /// Defaults to `true` if not configured.
    pub fn warn_asymmetric(&self) -> bool {
        self.settings.warn_asymmetric.unwrap_or(true)
    }

    /// Get the preset used when no instance file is given.
    ///
    /// Defaults to `Preset::Australia` if not configured.
    pub fn default_preset(&self) -> Result<Preset, ConfigError> {
        match &self.settings.default_preset {
            Some(name) => name
                .parse()
                .map_err(|e: InstanceError| ConfigError::InvalidValue(e.to_string())),
            None => Ok(Preset::Australia),
        }
    }

    /// Get the path the configuration was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
