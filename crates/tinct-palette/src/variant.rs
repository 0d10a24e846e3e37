#![forbid(unsafe_code)]

//! Theme variant identifiers.

use std::fmt;
use std::str::FromStr;

/// Custom accent hues.
///
/// [`Accent::ALL`] is also the order in which accent preference flags are
/// tested when several are set at once: the first set flag wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Accent {
    Violet,
    Blue,
    Pink,
    Green,
    Red,
    Orange,
    Yellow,
    Cyan,
    Purple,
}

impl Accent {
    pub const ALL: [Accent; 9] = [
        Accent::Violet,
        Accent::Blue,
        Accent::Pink,
        Accent::Green,
        Accent::Red,
        Accent::Orange,
        Accent::Yellow,
        Accent::Cyan,
        Accent::Purple,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Accent::Violet => "violet",
            Accent::Blue => "blue",
            Accent::Pink => "pink",
            Accent::Green => "green",
            Accent::Red => "red",
            Accent::Orange => "orange",
            Accent::Yellow => "yellow",
            Accent::Cyan => "cyan",
            Accent::Purple => "purple",
        }
    }
}

/// One of the closed set of named themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    Light,
    Dark,
    /// True-black surfaces for OLED screens.
    Black,
    /// Private browsing. Never persisted; derived from browsing state.
    Private,
    Accent(Accent),
}

impl ThemeVariant {
    pub const COUNT: usize = 4 + Accent::ALL.len();

    pub const ALL: [ThemeVariant; ThemeVariant::COUNT] = [
        ThemeVariant::Light,
        ThemeVariant::Dark,
        ThemeVariant::Black,
        ThemeVariant::Private,
        ThemeVariant::Accent(Accent::Violet),
        ThemeVariant::Accent(Accent::Blue),
        ThemeVariant::Accent(Accent::Pink),
        ThemeVariant::Accent(Accent::Green),
        ThemeVariant::Accent(Accent::Red),
        ThemeVariant::Accent(Accent::Orange),
        ThemeVariant::Accent(Accent::Yellow),
        ThemeVariant::Accent(Accent::Cyan),
        ThemeVariant::Accent(Accent::Purple),
    ];

    /// Dense index into [`ThemeVariant::ALL`].
    pub const fn index(self) -> usize {
        match self {
            ThemeVariant::Light => 0,
            ThemeVariant::Dark => 1,
            ThemeVariant::Black => 2,
            ThemeVariant::Private => 3,
            ThemeVariant::Accent(accent) => 4 + accent.index(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ThemeVariant::Light => "light",
            ThemeVariant::Dark => "dark",
            ThemeVariant::Black => "black",
            ThemeVariant::Private => "private",
            ThemeVariant::Accent(accent) => accent.name(),
        }
    }

    /// Everything except Light renders on dark surfaces.
    pub const fn is_dark(self) -> bool {
        !matches!(self, ThemeVariant::Light)
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a stored theme name does not name a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeVariantError {
    input: String,
}

impl fmt::Display for ParseThemeVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme variant {:?}", self.input)
    }
}

impl std::error::Error for ParseThemeVariantError {}

impl FromStr for ThemeVariant {
    type Err = ParseThemeVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let normalized = match normalized.as_str() {
            "oled" => "black",
            other => other,
        };
        ThemeVariant::ALL
            .iter()
            .copied()
            .find(|v| v.name() == normalized)
            .ok_or_else(|| ParseThemeVariantError {
                input: s.to_string(),
            })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ThemeVariant {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ThemeVariant {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
