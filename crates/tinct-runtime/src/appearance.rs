#![forbid(unsafe_code)]

//! Operating-system appearance queries.

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// The OS-level night-mode setting the host applies to its surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum AppearanceMode {
    ForceLight,
    ForceDark,
    #[default]
    FollowSystem,
    /// Dark while the device is saving battery.
    AutoBattery,
}

/// Read-only view of the device appearance.
pub trait OsAppearance: Send + Sync {
    fn appearance_mode(&self) -> AppearanceMode;

    /// Whether the device is currently rendering dark (night mode on, or
    /// battery saver on under [`AppearanceMode::AutoBattery`]).
    fn is_system_dark(&self) -> bool;

    /// Platform capability level, compared against the floors in
    /// [`ThemeConfig`](crate::config::ThemeConfig).
    fn capability_level(&self) -> u32;
}

/// Fixed appearance, for tests and for hosts that sample the OS once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAppearance {
    pub mode: AppearanceMode,
    pub system_dark: bool,
    pub capability_level: u32,
}

impl StaticAppearance {
    /// Light device on a recent platform.
    pub const fn light() -> Self {
        Self {
            mode: AppearanceMode::FollowSystem,
            system_dark: false,
            capability_level: 34,
        }
    }

    pub const fn dark() -> Self {
        Self {
            system_dark: true,
            ..Self::light()
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: AppearanceMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_capability_level(mut self, level: u32) -> Self {
        self.capability_level = level;
        self
    }
}

impl Default for StaticAppearance {
    fn default() -> Self {
        Self::light()
    }
}

impl OsAppearance for StaticAppearance {
    fn appearance_mode(&self) -> AppearanceMode {
        self.mode
    }

    fn is_system_dark(&self) -> bool {
        self.system_dark
    }

    fn capability_level(&self) -> u32 {
        self.capability_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_compose() {
        let os = StaticAppearance::dark()
            .with_mode(AppearanceMode::AutoBattery)
            .with_capability_level(21);
        assert_eq!(os.appearance_mode(), AppearanceMode::AutoBattery);
        assert!(os.is_system_dark());
        assert_eq!(os.capability_level(), 21);
    }

    #[test]
    fn default_follows_system() {
        assert_eq!(AppearanceMode::default(), AppearanceMode::FollowSystem);
        assert!(!StaticAppearance::default().is_system_dark());
    }
}
