#![forbid(unsafe_code)]

//! Tinct public facade crate.
//!
//! Re-exports the palette catalog from `tinct-palette` and the selection and
//! surface-management machinery from `tinct-runtime`, with a small prelude
//! for hosts.
//!
//! ```
//! use tinct::prelude::*;
//!
//! let store = MemoryPreferenceStore::with_flags(ThemeFlags::BLUE | ThemeFlags::BLACK);
//! let prefs = ThemePreferences::snapshot(&store);
//! let variant = select_theme(&prefs, &StaticAppearance::dark(), true);
//!
//! assert_eq!(variant, ThemeVariant::Accent(Accent::Blue));
//! let layer = palette_for(variant)[Role::Layer1];
//! assert!(layer.is_opaque());
//! ```

pub mod error;

pub use error::{Error, Result};

// --- Palette re-exports ----------------------------------------------------

pub use tinct_palette::{
    Accent, Color, LivePalette, PaletteBuilder, PaletteModel, PaletteRegistry, PaletteSnapshot,
    Role, ThemeVariant, palette_for, registry,
};

// --- Runtime re-exports ----------------------------------------------------

pub use tinct_runtime::{
    AppearanceMode, AttributeId, BrowsingMode, MemoryPreferenceStore, OsAppearance,
    PreferenceStore, ResourceId, StaticAppearance, StyleContext, SurfaceHost, SystemBarConfig,
    SystemBarFlags, ThemeChoice, ThemeConfig, ThemeFlags, ThemeManager, ThemePreferences,
    ThemeStyle, TransitionOutcome, compute_system_bars, explain_selection, resolve_attribute,
    resolve_attribute_color, select_theme,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Accent, AttributeId, BrowsingMode, Color, Error, MemoryPreferenceStore, OsAppearance,
        PaletteModel, PreferenceStore, Result, Role, StaticAppearance, StyleContext, SurfaceHost,
        SystemBarConfig, ThemeConfig, ThemeFlags, ThemeManager, ThemePreferences, ThemeStyle,
        ThemeVariant, palette_for, select_theme,
    };

    pub use crate::{palette, runtime};
}

pub use tinct_palette as palette;
pub use tinct_runtime as runtime;
