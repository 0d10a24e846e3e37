#![forbid(unsafe_code)]

//! Status-bar and navigation-bar appearance.
//!
//! [`compute_system_bars`] is the whole decision: it takes everything it needs
//! as plain values and returns the [`SystemBarConfig`] to hand to the host.
//! Running it twice on the same inputs yields the same configuration.

use bitflags::bitflags;
use tinct_palette::{Color, PaletteModel, Role};

bitflags! {
    /// Icon contrast requested from the OS.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SystemBarFlags: u8 {
        /// Dark status-bar icons on a light background.
        const LIGHT_STATUS_BAR     = 0b01;
        /// Dark navigation-bar icons on a light background.
        const LIGHT_NAVIGATION_BAR = 0b10;
    }
}

/// Colors and icon contrast for both system bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemBarConfig {
    pub status_bar_color: Color,
    pub navigation_bar_color: Color,
    pub flags: SystemBarFlags,
}

/// Light or dark system-bar appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarAppearance {
    Light,
    Dark,
}

impl BarAppearance {
    /// Private browsing is always dark. Otherwise dark when the theme forces
    /// it or the effective OS appearance is dark, forced night mode included.
    pub const fn decide(private_browsing: bool, forced_dark: bool, os_dark: bool) -> Self {
        if private_browsing || forced_dark || os_dark {
            BarAppearance::Dark
        } else {
            BarAppearance::Light
        }
    }
}

/// Minimum capability levels for toggling icon contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapabilityFloor {
    pub status_bar_icons: u32,
    pub navigation_bar_icons: u32,
}

impl Default for CapabilityFloor {
    fn default() -> Self {
        Self {
            status_bar_icons: 23,
            navigation_bar_icons: 27,
        }
    }
}

/// Inputs to [`compute_system_bars`].
#[derive(Debug, Clone, Copy)]
pub struct SystemBarInputs<'a> {
    pub appearance: BarAppearance,
    /// Palette of the variant the surface is rendering.
    pub palette: &'a PaletteModel,
    /// Color of the surface's theme-level status-bar attribute.
    pub theme_status_bar_color: Color,
    /// Force the status bar to the layer-3 role.
    pub override_status_bar_color: bool,
    pub capability_level: u32,
    pub floor: CapabilityFloor,
}

/// Decide system-bar colors and icon contrast.
///
/// Below the status-bar floor icons cannot be darkened, so the status bar is
/// opaque black whatever was asked for. Below the navigation-bar floor the
/// navigation icon flag is never set.
pub fn compute_system_bars(inputs: &SystemBarInputs<'_>) -> SystemBarConfig {
    let can_toggle_status = inputs.capability_level >= inputs.floor.status_bar_icons;
    let can_toggle_navigation = inputs.capability_level >= inputs.floor.navigation_bar_icons;

    let status_bar_color = if !can_toggle_status {
        Color::BLACK
    } else if inputs.override_status_bar_color {
        inputs.palette[Role::Layer3]
    } else {
        inputs.theme_status_bar_color
    };

    let mut flags = SystemBarFlags::empty();
    if inputs.appearance == BarAppearance::Light {
        if can_toggle_status {
            flags |= SystemBarFlags::LIGHT_STATUS_BAR;
        }
        if can_toggle_navigation {
            flags |= SystemBarFlags::LIGHT_NAVIGATION_BAR;
        }
    }

    SystemBarConfig {
        status_bar_color,
        navigation_bar_color: inputs.palette[Role::Layer1],
        flags,
    }
}
