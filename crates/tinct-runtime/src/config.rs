#![forbid(unsafe_code)]

//! Theme runtime configuration.
//!
//! ```toml
//! # tinct.toml
//! status_bar_icon_min_level = 23
//! navigation_bar_icon_min_level = 27
//! default_mode = "normal"
//! strict_attributes = false
//! ```
//!
//! ```rust,ignore
//! let config = ThemeConfig::from_toml_file("tinct.toml")?.validated()?;
//! ```
//!
//! `ThemeConfig::default()` matches the built-in behavior, and every field
//! may be omitted from a file.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::attributes::MissSeverity;
use crate::manager::BrowsingMode;
use crate::system_bars::CapabilityFloor;

/// Tunables for [`ThemeManager`](crate::manager::ThemeManager).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ThemeConfig {
    /// Lowest capability level that can darken status-bar icons.
    pub status_bar_icon_min_level: u32,

    /// Lowest capability level that can darken navigation-bar icons.
    pub navigation_bar_icon_min_level: u32,

    /// Browsing mode for a surface with nothing to restore.
    pub default_mode: BrowsingMode,

    /// Report unresolved attributes at `error` instead of `warn`.
    pub strict_attributes: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let floor = CapabilityFloor::default();
        Self {
            status_bar_icon_min_level: floor.status_bar_icons,
            navigation_bar_icon_min_level: floor.navigation_bar_icons,
            default_mode: BrowsingMode::Normal,
            strict_attributes: false,
        }
    }
}

impl ThemeConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.status_bar_icon_min_level == 0 {
            errors.push("status_bar_icon_min_level must be > 0".into());
        }

        if self.navigation_bar_icon_min_level < self.status_bar_icon_min_level {
            errors.push(format!(
                "navigation_bar_icon_min_level ({}) must be >= status_bar_icon_min_level ({})",
                self.navigation_bar_icon_min_level, self.status_bar_icon_min_level
            ));
        }

        errors
    }

    /// `self` if [`validate`](Self::validate) finds nothing.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    pub fn capability_floor(&self) -> CapabilityFloor {
        CapabilityFloor {
            status_bar_icons: self.status_bar_icon_min_level,
            navigation_bar_icons: self.navigation_bar_icon_min_level,
        }
    }

    pub fn miss_severity(&self) -> MissSeverity {
        if self.strict_attributes {
            MissSeverity::Error
        } else {
            MissSeverity::Warn
        }
    }
}

/// Errors from loading a [`ThemeConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
