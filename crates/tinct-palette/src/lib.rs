#![forbid(unsafe_code)]

//! Palette primitives for tinct.
//!
//! # Role in tinct
//! `tinct-palette` is the data half of theming: the [`Color`] primitive, the
//! closed [`Role`] set, the [`PaletteModel`] that assigns one color to every
//! role, and the [`PaletteRegistry`] mapping each [`ThemeVariant`] to its
//! palette. It has no notion of preferences, OS signals, or UI surfaces; those
//! live in `tinct-runtime`.
//!
//! # This crate provides
//! - [`Color`] packed ARGB values.
//! - [`Role`] and [`PaletteModel`] with override-based derivation
//!   ([`PaletteBuilder`]).
//! - [`ThemeVariant`] and [`Accent`], the closed set of themes.
//! - [`registry()`] / [`palette_for`] for the built-in catalog.
//! - [`LivePalette`] for handing a swap-on-change palette to renderers.

/// Packed ARGB color primitive.
pub mod color;
/// Live, wholesale-replaceable palette container.
pub mod live;
/// Palette model and builder.
pub mod palette;
/// Built-in palette catalog.
pub mod registry;
/// Named color slots.
pub mod role;
/// Theme variant identifiers.
pub mod variant;

pub use color::{Color, ParseColorError};
pub use live::{LivePalette, PaletteSnapshot};
pub use palette::{PaletteBuilder, PaletteModel};
pub use registry::{PaletteRegistry, palette_for, registry};
pub use role::{ParseRoleError, Role};
pub use variant::{Accent, ParseThemeVariantError, ThemeVariant};
