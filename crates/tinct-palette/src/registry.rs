#![forbid(unsafe_code)]

//! Built-in palettes for every [`ThemeVariant`].
//!
//! Dark and Light are authored role by role. Every other variant is derived
//! from Dark by overriding the roles that carry its hue; primary text and
//! icon roles keep Dark's near-white values so contrast does not depend on
//! the accent.

use std::sync::OnceLock;

use crate::color::Color;
use crate::palette::{PaletteBuilder, PaletteModel};
use crate::role::Role;
use crate::variant::{Accent, ThemeVariant};

// Named base colors shared by the authored palettes.
const LIGHT_GREY_05: Color = Color::hex(0xFBFBFE);
const LIGHT_GREY_10: Color = Color::hex(0xF9F9FB);
const LIGHT_GREY_20: Color = Color::hex(0xF0F0F4);
const LIGHT_GREY_30: Color = Color::hex(0xE0E0E6);
const LIGHT_GREY_40: Color = Color::hex(0xCFCFD8);
const LIGHT_GREY_50: Color = Color::hex(0xBFBFC9);
const DARK_GREY_05: Color = Color::hex(0x5B5B66);
const DARK_GREY_10: Color = Color::hex(0x52525E);
const DARK_GREY_30: Color = Color::hex(0x42414D);
const DARK_GREY_50: Color = Color::hex(0x32313C);
const DARK_GREY_60: Color = Color::hex(0x2B2A33);
const DARK_GREY_80: Color = Color::hex(0x1C1B22);
const DARK_GREY_90: Color = Color::hex(0x15141A);
const VIOLET_20: Color = Color::hex(0xCB9BFF);
const VIOLET_40: Color = Color::hex(0xAB71FF);
const VIOLET_50: Color = Color::hex(0x9059FF);
const VIOLET_60: Color = Color::hex(0x7542E5);
const VIOLET_70: Color = Color::hex(0x592ACB);
const INK_20: Color = Color::hex(0x312A64);
const RED_20: Color = Color::hex(0xFFB3BB);
const RED_70: Color = Color::hex(0xC50042);
const GREEN_60: Color = Color::hex(0x2AC3A2);
const GREEN_70: Color = Color::hex(0x008787);
const YELLOW_20: Color = Color::hex(0xFFEA80);
const YELLOW_40: Color = Color::hex(0xFFBD4F);
const YELLOW_60: Color = Color::hex(0xE27F2E);
const YELLOW_70: Color = Color::hex(0xC45A27);

fn dark_role(role: Role) -> Color {
    match role {
        Role::Layer1 => DARK_GREY_60,
        Role::Layer2 => DARK_GREY_30,
        Role::Layer3 => DARK_GREY_80,
        Role::Layer4Start => VIOLET_70,
        Role::Layer4Center => VIOLET_60,
        Role::Layer4End => VIOLET_40,
        Role::LayerAccent => VIOLET_40,
        Role::LayerAccentNonOpaque => VIOLET_50.with_alpha(0x3D),
        Role::LayerSearch => DARK_GREY_80,
        Role::Scrim => DARK_GREY_90.with_alpha(0xF2),
        Role::GradientStart => VIOLET_70,
        Role::GradientEnd => VIOLET_40,
        Role::ActionPrimary => VIOLET_60,
        Role::ActionSecondary => DARK_GREY_05,
        Role::ActionTertiary => DARK_GREY_10,
        Role::ActionWarning => YELLOW_40.with_alpha(0x69),
        Role::ActionSuccess => GREEN_60,
        Role::FormDefault => LIGHT_GREY_05,
        Role::FormSelected => VIOLET_40,
        Role::FormSurface => DARK_GREY_05,
        Role::FormDisabled => LIGHT_GREY_05.with_alpha(0x66),
        Role::FormOn => VIOLET_40,
        Role::FormOff => LIGHT_GREY_05,
        Role::TextPrimary => LIGHT_GREY_05,
        Role::TextSecondary => LIGHT_GREY_40,
        Role::TextDisabled => LIGHT_GREY_05.with_alpha(0x66),
        Role::TextCritical => RED_20,
        Role::TextAccent => VIOLET_20,
        Role::TextAccentDisabled => VIOLET_20.with_alpha(0x99),
        Role::TextWarning => YELLOW_20,
        Role::TextActionPrimary => LIGHT_GREY_05,
        Role::TextActionSecondary => LIGHT_GREY_05,
        Role::TextOnColorPrimary => LIGHT_GREY_05,
        Role::IconPrimary => LIGHT_GREY_05,
        Role::IconPrimaryInactive => LIGHT_GREY_05.with_alpha(0x99),
        Role::IconSecondary => LIGHT_GREY_40,
        Role::IconActive => VIOLET_40,
        Role::IconAccent => VIOLET_20,
        Role::IconOnColor => LIGHT_GREY_05,
        Role::IconCritical => RED_20,
        Role::IconActionPrimary => LIGHT_GREY_05,
        Role::BorderPrimary => DARK_GREY_05,
        Role::BorderInverted => LIGHT_GREY_30,
        Role::BorderFormDefault => LIGHT_GREY_05,
        Role::BorderAccent => VIOLET_40,
        Role::BorderDisabled => LIGHT_GREY_05.with_alpha(0x66),
        Role::BorderWarning => YELLOW_40,
        Role::Divider => DARK_GREY_50,
        Role::TabActive => DARK_GREY_30,
        Role::TabInactive => DARK_GREY_80,
        Role::Ripple => Color::WHITE,
    }
}

fn light_role(role: Role) -> Color {
    match role {
        Role::Layer1 => LIGHT_GREY_10,
        Role::Layer2 => Color::WHITE,
        Role::Layer3 => LIGHT_GREY_20,
        Role::Layer4Start => VIOLET_60,
        Role::Layer4Center => VIOLET_50,
        Role::Layer4End => Color::hex(0xFF4AA2),
        Role::LayerAccent => VIOLET_70,
        Role::LayerAccentNonOpaque => VIOLET_70.with_alpha(0x1F),
        Role::LayerSearch => LIGHT_GREY_30,
        Role::Scrim => DARK_GREY_30.with_alpha(0xF2),
        Role::GradientStart => VIOLET_70,
        Role::GradientEnd => VIOLET_40,
        Role::ActionPrimary => INK_20,
        Role::ActionSecondary => LIGHT_GREY_30,
        Role::ActionTertiary => LIGHT_GREY_40,
        Role::ActionWarning => YELLOW_60.with_alpha(0x1F),
        Role::ActionSuccess => GREEN_70,
        Role::FormDefault => DARK_GREY_90,
        Role::FormSelected => INK_20,
        Role::FormSurface => DARK_GREY_05.with_alpha(0x0D),
        Role::FormDisabled => DARK_GREY_90.with_alpha(0x66),
        Role::FormOn => INK_20,
        Role::FormOff => LIGHT_GREY_50,
        Role::TextPrimary => DARK_GREY_90,
        Role::TextSecondary => DARK_GREY_05,
        Role::TextDisabled => DARK_GREY_90.with_alpha(0x66),
        Role::TextCritical => RED_70,
        Role::TextAccent => VIOLET_70,
        Role::TextAccentDisabled => VIOLET_70.with_alpha(0xCC),
        Role::TextWarning => YELLOW_70,
        Role::TextActionPrimary => Color::WHITE,
        Role::TextActionSecondary => DARK_GREY_90,
        Role::TextOnColorPrimary => Color::WHITE,
        Role::IconPrimary => DARK_GREY_90,
        Role::IconPrimaryInactive => DARK_GREY_90.with_alpha(0xCC),
        Role::IconSecondary => DARK_GREY_05,
        Role::IconActive => VIOLET_60,
        Role::IconAccent => VIOLET_60,
        Role::IconOnColor => Color::WHITE,
        Role::IconCritical => RED_70,
        Role::IconActionPrimary => Color::WHITE,
        Role::BorderPrimary => LIGHT_GREY_30,
        Role::BorderInverted => DARK_GREY_90,
        Role::BorderFormDefault => DARK_GREY_90,
        Role::BorderAccent => INK_20,
        Role::BorderDisabled => DARK_GREY_90.with_alpha(0x66),
        Role::BorderWarning => YELLOW_70,
        Role::Divider => LIGHT_GREY_40,
        Role::TabActive => Color::WHITE,
        Role::TabInactive => LIGHT_GREY_20,
        Role::Ripple => Color::BLACK,
    }
}

/// Overrides that turn Dark into true-black for OLED screens.
const BLACK_OVERRIDES: [(Role, Color); 8] = [
    (Role::Layer1, Color::BLACK),
    (Role::Layer2, DARK_GREY_90),
    (Role::Layer3, Color::BLACK),
    (Role::LayerSearch, DARK_GREY_90),
    (Role::Scrim, Color::BLACK.with_alpha(0xF2)),
    (Role::Divider, DARK_GREY_80),
    (Role::TabActive, DARK_GREY_90),
    (Role::TabInactive, Color::BLACK),
];

/// Private browsing keeps Dark's roles but moves surfaces into the ink family.
const PRIVATE_OVERRIDES: [(Role, Color); 5] = [
    (Role::Layer1, Color::hex(0x291D4F)),
    (Role::Layer2, Color::hex(0x342F6D)),
    (Role::Layer3, Color::hex(0x1D1133)),
    (Role::LayerSearch, Color::hex(0x1D1133)),
    (Role::Divider, Color::hex(0x4A3C7A)),
];

/// Shades of one hue, darkest first, used to derive an accent palette.
#[derive(Debug, Clone, Copy)]
struct HueFamily {
    deep: Color,
    surface: Color,
    raised: Color,
    border: Color,
    shade: Color,
    vivid: Color,
    light: Color,
    pale: Color,
}

const fn hue(shades: [u32; 8]) -> HueFamily {
    HueFamily {
        deep: Color::hex(shades[0]),
        surface: Color::hex(shades[1]),
        raised: Color::hex(shades[2]),
        border: Color::hex(shades[3]),
        shade: Color::hex(shades[4]),
        vivid: Color::hex(shades[5]),
        light: Color::hex(shades[6]),
        pale: Color::hex(shades[7]),
    }
}

const fn hue_family(accent: Accent) -> HueFamily {
    match accent {
        Accent::Violet => hue([
            0x1E1538, 0x2C1F52, 0x3E2D70, 0x5B46A0, 0x45278D, 0x7542E5, 0xAB71FF, 0xCB9BFF,
        ]),
        Accent::Blue => hue([
            0x0B1A33, 0x10264A, 0x193763, 0x2D5496, 0x073072, 0x0060DF, 0x0090ED, 0x9CD4FF,
        ]),
        Accent::Pink => hue([
            0x2E0E22, 0x431534, 0x5A1F47, 0x8A2F6B, 0x7F145B, 0xE31587, 0xFF4AA2, 0xFF8AC5,
        ]),
        Accent::Green => hue([
            0x0B2620, 0x10372E, 0x17493D, 0x22705E, 0x005E5E, 0x008787, 0x2AC3A2, 0x88FFD1,
        ]),
        Accent::Red => hue([
            0x2E0B12, 0x44111C, 0x5C1826, 0x8C2438, 0x810220, 0xC50042, 0xFF6A75, 0xFFB3BB,
        ]),
        Accent::Orange => hue([
            0x2E150A, 0x45200F, 0x5E2D16, 0x8F4522, 0x9E280B, 0xE25920, 0xFF8A50, 0xFFB587,
        ]),
        Accent::Yellow => hue([
            0x2B230A, 0x40340F, 0x574716, 0x856C22, 0xC45A27, 0xE27F2E, 0xFFBD4F, 0xFFEA80,
        ]),
        Accent::Cyan => hue([
            0x082A30, 0x0C3D46, 0x12535F, 0x1C7E90, 0x00718A, 0x00B3F4, 0x00DDFF, 0xAAF2FF,
        ]),
        Accent::Purple => hue([
            0x26102E, 0x381846, 0x4C215F, 0x75338F, 0x722291, 0xB833E1, 0xF770FF, 0xF68FFF,
        ]),
    }
}

/// Shades an accent assigns to [`Role::SURFACES`], in that order.
const fn surface_shades(h: HueFamily) -> [Color; 6] {
    [h.surface, h.raised, h.deep, h.shade, h.vivid, h.light]
}

/// Non-surface roles an accent re-specifies on top of Dark.
fn accent_overrides(h: HueFamily) -> [(Role, Color); 16] {
    [
        (Role::LayerAccent, h.light),
        (Role::LayerAccentNonOpaque, h.vivid.with_alpha(0x3D)),
        (Role::LayerSearch, h.deep),
        (Role::GradientStart, h.shade),
        (Role::GradientEnd, h.light),
        (Role::ActionPrimary, h.vivid),
        (Role::ActionSecondary, h.border),
        (Role::FormSelected, h.light),
        (Role::FormOn, h.light),
        (Role::TextAccent, h.pale),
        (Role::IconActive, h.light),
        (Role::IconAccent, h.pale),
        (Role::BorderPrimary, h.border),
        (Role::BorderAccent, h.light),
        (Role::TabActive, h.raised),
        (Role::TabInactive, h.deep),
    ]
}

fn accent_palette(dark: PaletteModel, accent: Accent) -> PaletteModel {
    let h = hue_family(accent);
    PaletteBuilder::from_palette(dark)
        .extend(Role::SURFACES.into_iter().zip(surface_shades(h)))
        .extend(accent_overrides(h))
        .build()
}

/// Fixed catalog of palettes, one per [`ThemeVariant`].
#[derive(Debug, Clone)]
pub struct PaletteRegistry {
    palettes: [PaletteModel; ThemeVariant::COUNT],
}

impl PaletteRegistry {
    pub fn new() -> Self {
        let dark = PaletteModel::from_fn(dark_role);
        let light = PaletteModel::from_fn(light_role);
        let palettes = ThemeVariant::ALL.map(|variant| match variant {
            ThemeVariant::Light => light,
            ThemeVariant::Dark => dark,
            ThemeVariant::Black => dark.with_overrides(&BLACK_OVERRIDES),
            ThemeVariant::Private => dark.with_overrides(&PRIVATE_OVERRIDES),
            ThemeVariant::Accent(accent) => accent_palette(dark, accent),
        });
        tracing::debug!(variants = ThemeVariant::COUNT, "palette registry built");
        Self { palettes }
    }

    /// Palette for `variant`. Total over the closed variant set.
    #[inline]
    pub fn palette_for(&self, variant: ThemeVariant) -> &PaletteModel {
        &self.palettes[variant.index()]
    }

    /// Iterate `(variant, palette)` for every variant.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeVariant, &PaletteModel)> + '_ {
        ThemeVariant::ALL
            .iter()
            .map(move |&variant| (variant, self.palette_for(variant)))
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: OnceLock<PaletteRegistry> = OnceLock::new();

/// Process-wide registry, built on first use.
pub fn registry() -> &'static PaletteRegistry {
    REGISTRY.get_or_init(PaletteRegistry::new)
}

/// Shorthand for `registry().palette_for(variant)`.
pub fn palette_for(variant: ThemeVariant) -> &'static PaletteModel {
    registry().palette_for(variant)
}
