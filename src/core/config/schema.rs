//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing to ensure they conform to
//! expected formats (e.g., the default preset must name a built-in instance).

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::instance::Preset;
use crate::core::validate::ScanMode;

/// Tool configuration (user scope).
///
/// # Example
///
/// ```toml
/// scan = "all-conflicts"
/// warn_asymmetric = false
/// default_preset = "australia"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Conflict reporting mode for `check`
    pub scan: Option<ScanMode>,

    /// Warn about arcs whose reverse arc is missing
    pub warn_asymmetric: Option<bool>,

    /// Preset used when no instance file is given
    pub default_preset: Option<String>,
}

impl Settings {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(preset) = &self.default_preset {
            preset
                .parse::<Preset>()
                .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        }
        Ok(())
    }
}
