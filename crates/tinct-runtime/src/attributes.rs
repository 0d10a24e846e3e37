#![forbid(unsafe_code)]

//! Attribute resolution with static fallbacks.
//!
//! Surfaces ask their live style context for the resource behind an abstract
//! attribute ("primary text color", "layer 1 surface"). A style that forgot to
//! define one must not break a render pass, so resolution degrades in three
//! tiers:
//!
//! 1. the live [`StyleContext`], unless it answers nothing or [`ResourceId::NONE`];
//! 2. [`FALLBACK_TABLE`], which points known attributes at palette roles;
//! 3. [`ResourceId::TRANSPARENT`], logged once as a warning.

use std::fmt;
use std::sync::OnceLock;

use ahash::AHashMap;
use tinct_palette::{Color, PaletteModel, Role};

/// Abstract style attribute identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeId(pub u32);

impl AttributeId {
    pub const TEXT_PRIMARY: AttributeId = AttributeId(0x7f04_0001);
    pub const TEXT_SECONDARY: AttributeId = AttributeId(0x7f04_0002);
    pub const TEXT_DISABLED: AttributeId = AttributeId(0x7f04_0003);
    pub const TEXT_ACCENT: AttributeId = AttributeId(0x7f04_0004);
    pub const LAYER1: AttributeId = AttributeId(0x7f04_0010);
    pub const LAYER2: AttributeId = AttributeId(0x7f04_0011);
    pub const LAYER3: AttributeId = AttributeId(0x7f04_0012);
    pub const LAYER_ACCENT: AttributeId = AttributeId(0x7f04_0013);
    pub const LAYER_SEARCH: AttributeId = AttributeId(0x7f04_0014);
    pub const SCRIM: AttributeId = AttributeId(0x7f04_0015);
    pub const ACTION_PRIMARY: AttributeId = AttributeId(0x7f04_0020);
    pub const ACTION_SECONDARY: AttributeId = AttributeId(0x7f04_0021);
    pub const ICON_PRIMARY: AttributeId = AttributeId(0x7f04_0030);
    pub const ICON_SECONDARY: AttributeId = AttributeId(0x7f04_0031);
    pub const ICON_ACTIVE: AttributeId = AttributeId(0x7f04_0032);
    pub const ICON_ACCENT: AttributeId = AttributeId(0x7f04_0033);
    pub const BORDER_PRIMARY: AttributeId = AttributeId(0x7f04_0040);
    pub const BORDER_ACCENT: AttributeId = AttributeId(0x7f04_0041);
    pub const DIVIDER: AttributeId = AttributeId(0x7f04_0042);
    pub const TAB_ACTIVE: AttributeId = AttributeId(0x7f04_0050);
    pub const TAB_INACTIVE: AttributeId = AttributeId(0x7f04_0051);
    pub const RIPPLE: AttributeId = AttributeId(0x7f04_0052);
    /// Theme-level status bar color.
    pub const STATUS_BAR_COLOR: AttributeId = AttributeId(0x7f04_0060);
    pub const NAVIGATION_BAR_COLOR: AttributeId = AttributeId(0x7f04_0061);
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attr:{:#010x}", self.0)
    }
}

/// Concrete resource identifier as handed back by a style context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u32);

/// Palette-role resources occupy `ROLE_BASE..ROLE_BASE + Role::COUNT`.
const ROLE_BASE: u32 = 0x7f06_0000;

impl ResourceId {
    /// Unresolved. A context answering this is treated as a miss.
    pub const NONE: ResourceId = ResourceId(0);

    /// Neutral transparent color, returned when nothing else resolves.
    pub const TRANSPARENT: ResourceId = ResourceId(0x0106_000d);

    pub const fn for_role(role: Role) -> ResourceId {
        ResourceId(ROLE_BASE + role.index() as u32)
    }

    /// The palette role this resource names, if it names one.
    pub fn role(self) -> Option<Role> {
        let offset = self.0.checked_sub(ROLE_BASE)? as usize;
        Role::ALL.get(offset).copied()
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role() {
            Some(role) => write!(f, "res:{role}"),
            None => write!(f, "res:{:#010x}", self.0),
        }
    }
}

/// Live attribute lookup for one surface's style.
pub trait StyleContext {
    fn resolve(&self, attr: AttributeId) -> Option<ResourceId>;

    /// Color behind a resource that is not a palette role.
    fn color(&self, resource: ResourceId) -> Option<Color> {
        let _ = resource;
        None
    }
}

/// Context that resolves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyStyleContext;

impl StyleContext for EmptyStyleContext {
    fn resolve(&self, _attr: AttributeId) -> Option<ResourceId> {
        None
    }
}

const fn role_fallback(attr: AttributeId, role: Role) -> (AttributeId, ResourceId) {
    (attr, ResourceId::for_role(role))
}

/// Known attributes and the palette role each falls back to.
pub static FALLBACK_TABLE: [(AttributeId, ResourceId); 24] = [
    role_fallback(AttributeId::TEXT_PRIMARY, Role::TextPrimary),
    role_fallback(AttributeId::TEXT_SECONDARY, Role::TextSecondary),
    role_fallback(AttributeId::TEXT_DISABLED, Role::TextDisabled),
    role_fallback(AttributeId::TEXT_ACCENT, Role::TextAccent),
    role_fallback(AttributeId::LAYER1, Role::Layer1),
    role_fallback(AttributeId::LAYER2, Role::Layer2),
    role_fallback(AttributeId::LAYER3, Role::Layer3),
    role_fallback(AttributeId::LAYER_ACCENT, Role::LayerAccent),
    role_fallback(AttributeId::LAYER_SEARCH, Role::LayerSearch),
    role_fallback(AttributeId::SCRIM, Role::Scrim),
    role_fallback(AttributeId::ACTION_PRIMARY, Role::ActionPrimary),
    role_fallback(AttributeId::ACTION_SECONDARY, Role::ActionSecondary),
    role_fallback(AttributeId::ICON_PRIMARY, Role::IconPrimary),
    role_fallback(AttributeId::ICON_SECONDARY, Role::IconSecondary),
    role_fallback(AttributeId::ICON_ACTIVE, Role::IconActive),
    role_fallback(AttributeId::ICON_ACCENT, Role::IconAccent),
    role_fallback(AttributeId::BORDER_PRIMARY, Role::BorderPrimary),
    role_fallback(AttributeId::BORDER_ACCENT, Role::BorderAccent),
    role_fallback(AttributeId::DIVIDER, Role::Divider),
    role_fallback(AttributeId::TAB_ACTIVE, Role::TabActive),
    role_fallback(AttributeId::TAB_INACTIVE, Role::TabInactive),
    role_fallback(AttributeId::RIPPLE, Role::Ripple),
    role_fallback(AttributeId::STATUS_BAR_COLOR, Role::Layer3),
    role_fallback(AttributeId::NAVIGATION_BAR_COLOR, Role::Layer1),
];

fn fallback_index() -> &'static AHashMap<AttributeId, ResourceId> {
    static INDEX: OnceLock<AHashMap<AttributeId, ResourceId>> = OnceLock::new();
    INDEX.get_or_init(|| FALLBACK_TABLE.iter().copied().collect())
}

/// Static fallback for `attr`, if the table knows it.
pub fn fallback_for(attr: AttributeId) -> Option<ResourceId> {
    fallback_index().get(&attr).copied()
}

/// Where a resolved resource came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Live(ResourceId),
    Fallback(ResourceId),
    /// Neither tier knew the attribute.
    Sentinel,
}

impl Resolution {
    pub const fn resource(self) -> ResourceId {
        match self {
            Resolution::Live(id) | Resolution::Fallback(id) => id,
            Resolution::Sentinel => ResourceId::TRANSPARENT,
        }
    }
}

/// How loudly a complete miss is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissSeverity {
    #[default]
    Warn,
    Error,
}

/// Resolve `attr`, degrading to the fallback table and then the sentinel.
///
/// Never fails. A miss in both tiers emits exactly one warning.
pub fn resolve_attribute(attr: AttributeId, ctx: &dyn StyleContext) -> ResourceId {
    resolve_attribute_detailed(attr, ctx, MissSeverity::Warn).resource()
}

/// [`resolve_attribute`] reporting the tier that answered.
pub fn resolve_attribute_detailed(
    attr: AttributeId,
    ctx: &dyn StyleContext,
    severity: MissSeverity,
) -> Resolution {
    if let Some(id) = ctx.resolve(attr).filter(|id| !id.is_none()) {
        return Resolution::Live(id);
    }
    if let Some(id) = fallback_for(attr) {
        tracing::debug!(attr = %attr, resource = %id, "attribute resolved from fallback table");
        return Resolution::Fallback(id);
    }
    match severity {
        MissSeverity::Warn => {
            tracing::warn!(attr = %attr, "unresolved style attribute, using transparent");
        }
        MissSeverity::Error => {
            tracing::error!(attr = %attr, "unresolved style attribute, using transparent");
        }
    }
    Resolution::Sentinel
}

/// Color behind a resource: palette roles come from `palette`, other
/// resources from the context, and anything unknown is transparent.
pub fn resource_color(
    resource: ResourceId,
    ctx: &dyn StyleContext,
    palette: &PaletteModel,
) -> Color {
    if resource == ResourceId::TRANSPARENT {
        return Color::TRANSPARENT;
    }
    match resource.role() {
        Some(role) => palette[role],
        None => ctx.color(resource).unwrap_or(Color::TRANSPARENT),
    }
}

/// Resolve `attr` all the way to a color.
pub fn resolve_attribute_color(
    attr: AttributeId,
    ctx: &dyn StyleContext,
    palette: &PaletteModel,
) -> Color {
    resource_color(resolve_attribute(attr, ctx), ctx, palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_palette::{ThemeVariant, palette_for};
    use tracing_test::traced_test;

    const UNKNOWN: AttributeId = AttributeId(0x7f04_ffff);
    const CUSTOM: ResourceId = ResourceId(0x7f08_0001);

    struct MapContext(Vec<(AttributeId, ResourceId)>);

    impl StyleContext for MapContext {
        fn resolve(&self, attr: AttributeId) -> Option<ResourceId> {
            self.0.iter().find(|(a, _)| *a == attr).map(|(_, r)| *r)
        }

        fn color(&self, resource: ResourceId) -> Option<Color> {
            (resource == CUSTOM).then_some(Color::hex(0x123456))
        }
    }

    #[test]
    fn role_resources_round_trip() {
        for role in Role::ALL {
            assert_eq!(ResourceId::for_role(role).role(), Some(role));
        }
        assert_eq!(ResourceId::NONE.role(), None);
        assert_eq!(ResourceId::TRANSPARENT.role(), None);
        assert_eq!(ResourceId(ROLE_BASE + Role::COUNT as u32).role(), None);
    }

    #[test]
    fn fallback_table_has_unique_attributes() {
        assert_eq!(fallback_index().len(), FALLBACK_TABLE.len());
    }

    #[test]
    fn live_context_wins() {
        let ctx = MapContext(vec![(AttributeId::TEXT_PRIMARY, CUSTOM)]);
        assert_eq!(
            resolve_attribute_detailed(AttributeId::TEXT_PRIMARY, &ctx, MissSeverity::Warn),
            Resolution::Live(CUSTOM)
        );
    }

    #[test]
    fn zero_resource_counts_as_miss() {
        let ctx = MapContext(vec![(AttributeId::LAYER1, ResourceId::NONE)]);
        assert_eq!(
            resolve_attribute(AttributeId::LAYER1, &ctx),
            ResourceId::for_role(Role::Layer1)
        );
    }

    #[test]
    #[traced_test]
    fn unknown_attribute_yields_sentinel_and_warns() {
        let id = resolve_attribute(UNKNOWN, &EmptyStyleContext);
        assert_eq!(id, ResourceId::TRANSPARENT);
        assert!(logs_contain("unresolved style attribute"));
    }

    #[test]
    #[traced_test]
    fn fallback_hit_does_not_warn() {
        let _ = resolve_attribute(AttributeId::DIVIDER, &EmptyStyleContext);
        assert!(!logs_contain("unresolved style attribute"));
    }

    #[test]
    fn colors_come_from_palette_or_context() {
        let dark = palette_for(ThemeVariant::Dark);
        let ctx = MapContext(vec![(AttributeId::TEXT_ACCENT, CUSTOM)]);
        assert_eq!(
            resolve_attribute_color(AttributeId::TEXT_ACCENT, &ctx, dark),
            Color::hex(0x123456)
        );
        assert_eq!(
            resolve_attribute_color(AttributeId::STATUS_BAR_COLOR, &ctx, dark),
            dark[Role::Layer3]
        );
        assert_eq!(
            resolve_attribute_color(UNKNOWN, &ctx, dark),
            Color::TRANSPARENT
        );
    }

    #[test]
    fn unknown_non_role_resource_is_transparent() {
        let light = palette_for(ThemeVariant::Light);
        assert_eq!(
            resource_color(ResourceId(0x0101_0001), &EmptyStyleContext, light),
            Color::TRANSPARENT
        );
    }
}
