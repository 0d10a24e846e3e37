#![forbid(unsafe_code)]

//! Tinct Runtime
//!
//! Decides which theme a surface renders and applies it.
//!
//! # Key Components
//!
//! - [`select_theme`] - Pure precedence table from preferences and OS
//!   appearance to one [`ThemeVariant`](tinct_palette::ThemeVariant)
//! - [`ThemeManager`] - Per-surface state machine for browsing mode, style,
//!   live palette and system bars
//! - [`resolve_attribute`] - Style attribute lookup with static fallbacks
//! - [`compute_system_bars`] - Status/navigation bar decision table
//! - [`ThemeConfig`] - Capability floors and defaults, loadable from TOML/JSON
//!
//! # Role in tinct
//! `tinct-runtime` consumes the palette catalog from `tinct-palette` and the
//! host's collaborators (a [`PreferenceStore`], an [`OsAppearance`], and a
//! [`SurfaceHost`]) and turns them into a style, a palette and a system-bar
//! configuration for each resume.

pub mod appearance;
pub mod attributes;
pub mod config;
#[cfg(feature = "subscriber")]
pub mod logging;
pub mod manager;
pub mod preferences;
pub mod selector;
pub mod system_bars;

pub use appearance::{AppearanceMode, OsAppearance, StaticAppearance};
pub use attributes::{
    AttributeId, EmptyStyleContext, FALLBACK_TABLE, MissSeverity, Resolution, ResourceId,
    StyleContext, resolve_attribute, resolve_attribute_color, resolve_attribute_detailed,
};
pub use config::{ConfigError, ThemeConfig};
pub use manager::{BrowsingMode, SurfaceHost, ThemeManager, ThemeStyle, TransitionOutcome};
pub use preferences::{
    MemoryPreferenceStore, PreferenceStore, ThemeChoice, ThemeFlags, ThemePreferences,
};
pub use selector::{PRECEDENCE, PrecedenceStep, Selection, explain_selection, select_theme};
pub use system_bars::{
    BarAppearance, CapabilityFloor, SystemBarConfig, SystemBarFlags, SystemBarInputs,
    compute_system_bars,
};
