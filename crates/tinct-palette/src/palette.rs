#![forbid(unsafe_code)]

//! The palette model: one color per [`Role`].
//!
//! A [`PaletteModel`] is created either by authoring every role of a base
//! palette ([`PaletteModel::from_fn`]) or by re-specifying a sparse set of
//! roles on top of a complete base ([`PaletteBuilder`]). Both paths start from
//! a value for every role, so no palette can ever be missing one.

use std::ops::Index;

use crate::color::Color;
use crate::role::Role;

/// Complete set of named color roles used to render every themeable surface.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteModel {
    colors: [Color; Role::COUNT],
}

impl PaletteModel {
    /// Author a palette role by role.
    ///
    /// Passing a closure with an exhaustive `match` makes the compiler reject
    /// a base palette that forgets a role.
    pub fn from_fn(mut author: impl FnMut(Role) -> Color) -> Self {
        Self {
            colors: Role::ALL.map(&mut author),
        }
    }

    #[inline]
    pub fn get(&self, role: Role) -> Color {
        self.colors[role.index()]
    }

    /// Iterate `(role, color)` pairs in [`Role::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Color)> + '_ {
        Role::ALL.iter().map(move |&role| (role, self.get(role)))
    }

    /// Copy of this palette with `overrides` applied on top.
    ///
    /// Later entries win when a role appears twice.
    #[must_use]
    pub fn with_overrides(&self, overrides: &[(Role, Color)]) -> Self {
        PaletteBuilder::from_palette(*self)
            .extend(overrides.iter().copied())
            .build()
    }

    /// Roles whose color differs between `self` and `other`.
    pub fn diff(&self, other: &PaletteModel) -> Vec<Role> {
        Role::ALL
            .iter()
            .copied()
            .filter(|&role| self.get(role) != other.get(role))
            .collect()
    }
}

impl Index<Role> for PaletteModel {
    type Output = Color;

    fn index(&self, role: Role) -> &Color {
        &self.colors[role.index()]
    }
}

impl std::fmt::Debug for PaletteModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (role, color) in self.iter() {
            map.entry(&role.name(), &color);
        }
        map.finish()
    }
}

/// Derives a palette from a complete base by overriding individual roles.
#[derive(Debug, Clone)]
pub struct PaletteBuilder {
    palette: PaletteModel,
}

impl PaletteBuilder {
    pub fn from_palette(base: PaletteModel) -> Self {
        Self { palette: base }
    }

    #[must_use]
    pub fn set(mut self, role: Role, color: Color) -> Self {
        self.palette.colors[role.index()] = color;
        self
    }

    #[must_use]
    pub fn extend(mut self, overrides: impl IntoIterator<Item = (Role, Color)>) -> Self {
        for (role, color) in overrides {
            self.palette.colors[role.index()] = color;
        }
        self
    }

    pub fn build(self) -> PaletteModel {
        self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(color: Color) -> PaletteModel {
        PaletteModel::from_fn(|_| color)
    }

    #[test]
    fn from_fn_visits_every_role_once() {
        let mut seen = Vec::new();
        let _ = PaletteModel::from_fn(|role| {
            seen.push(role);
            Color::BLACK
        });
        assert_eq!(seen, Role::ALL.to_vec());
    }

    #[test]
    fn builder_preserves_base_fields() {
        let base = flat(Color::BLACK);
        let derived = PaletteBuilder::from_palette(base)
            .set(Role::Layer1, Color::WHITE)
            .build();
        assert_eq!(derived[Role::Layer1], Color::WHITE);
        assert_eq!(derived[Role::TextPrimary], Color::BLACK);
        assert_eq!(derived.diff(&base), vec![Role::Layer1]);
    }

    #[test]
    fn overrides_do_not_touch_the_base() {
        let base = flat(Color::BLACK);
        let _ = base.with_overrides(&[(Role::Ripple, Color::WHITE)]);
        assert_eq!(base[Role::Ripple], Color::BLACK);
    }

    #[test]
    fn later_override_wins() {
        let derived = flat(Color::BLACK).with_overrides(&[
            (Role::Scrim, Color::WHITE),
            (Role::Scrim, Color::hex(0x123456)),
        ]);
        assert_eq!(derived[Role::Scrim], Color::hex(0x123456));
    }

    #[test]
    fn iter_yields_role_set_in_order() {
        let roles: Vec<_> = flat(Color::WHITE).iter().map(|(r, _)| r).collect();
        assert_eq!(roles, Role::ALL.to_vec());
    }

    #[test]
    fn debug_lists_role_names() {
        let dbg = format!("{:?}", flat(Color::WHITE));
        assert!(dbg.contains("layer1"));
        assert!(dbg.contains("ripple"));
    }
}
