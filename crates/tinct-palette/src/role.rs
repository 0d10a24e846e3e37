#![forbid(unsafe_code)]

//! Named color slots.
//!
//! A [`Role`] is one themeable surface or foreground. The set is closed: every
//! palette carries exactly one color per role, so adding a role here forces
//! every base palette in [`crate::registry`] to author it.

use std::fmt;
use std::str::FromStr;

macro_rules! roles {
    ($($variant:ident => $name:literal,)+) => {
        /// A single named color slot within a palette.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Role {
            $($variant,)+
        }

        impl Role {
            /// Every role, in declaration order.
            pub const ALL: [Role; Role::COUNT] = [$(Role::$variant,)+];

            /// Stable snake_case name used in logs and config files.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Role::$variant => $name,)+
                }
            }
        }
    };
}

roles! {
    Layer1 => "layer1",
    Layer2 => "layer2",
    Layer3 => "layer3",
    Layer4Start => "layer4_start",
    Layer4Center => "layer4_center",
    Layer4End => "layer4_end",
    LayerAccent => "layer_accent",
    LayerAccentNonOpaque => "layer_accent_non_opaque",
    LayerSearch => "layer_search",
    Scrim => "scrim",
    GradientStart => "gradient_start",
    GradientEnd => "gradient_end",
    ActionPrimary => "action_primary",
    ActionSecondary => "action_secondary",
    ActionTertiary => "action_tertiary",
    ActionWarning => "action_warning",
    ActionSuccess => "action_success",
    FormDefault => "form_default",
    FormSelected => "form_selected",
    FormSurface => "form_surface",
    FormDisabled => "form_disabled",
    FormOn => "form_on",
    FormOff => "form_off",
    TextPrimary => "text_primary",
    TextSecondary => "text_secondary",
    TextDisabled => "text_disabled",
    TextCritical => "text_critical",
    TextAccent => "text_accent",
    TextAccentDisabled => "text_accent_disabled",
    TextWarning => "text_warning",
    TextActionPrimary => "text_action_primary",
    TextActionSecondary => "text_action_secondary",
    TextOnColorPrimary => "text_on_color_primary",
    IconPrimary => "icon_primary",
    IconPrimaryInactive => "icon_primary_inactive",
    IconSecondary => "icon_secondary",
    IconActive => "icon_active",
    IconAccent => "icon_accent",
    IconOnColor => "icon_on_color",
    IconCritical => "icon_critical",
    IconActionPrimary => "icon_action_primary",
    BorderPrimary => "border_primary",
    BorderInverted => "border_inverted",
    BorderFormDefault => "border_form_default",
    BorderAccent => "border_accent",
    BorderDisabled => "border_disabled",
    BorderWarning => "border_warning",
    Divider => "divider",
    TabActive => "tab_active",
    TabInactive => "tab_inactive",
    Ripple => "ripple",
}

impl Role {
    pub const COUNT: usize = 51;

    /// Position of this role in [`Role::ALL`] and in palette storage.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Surface roles that establish a variant's hue.
    pub const SURFACES: [Role; 6] = [
        Role::Layer1,
        Role::Layer2,
        Role::Layer3,
        Role::Layer4Start,
        Role::Layer4Center,
        Role::Layer4End,
    ];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a role name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    input: String,
}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color role {:?}", self.input)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.name() == s)
            .ok_or_else(|| ParseRoleError {
                input: s.to_string(),
            })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
