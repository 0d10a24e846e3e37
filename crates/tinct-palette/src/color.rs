#![forbid(unsafe_code)]

//! Packed ARGB color primitive.
//!
//! Colors are stored the way the host platform hands them around: a single
//! `u32` laid out as `0xAARRGGBB`. Keeping the packed form means a palette is
//! a flat array of integers and copying one is a plain memcpy.

use std::fmt;
use std::str::FromStr;

/// A 32-bit ARGB color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Opaque color from 8-bit channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xFF, r, g, b)
    }

    #[inline]
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub const fn hex(rgb: u32) -> Self {
        Self(0xFF00_0000 | (rgb & 0x00FF_FFFF))
    }

    /// Wrap a raw `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb_u32(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn to_argb_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a() == 0xFF
    }

    /// Same channels, explicit alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Same channels, alpha scaled to `opacity` (clamped to `0.0..=1.0`).
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        let alpha = (self.a() as f32 * opacity).round() as u8;
        self.with_alpha(alpha)
    }

    /// WCAG relative luminance of the color channels, ignoring alpha.
    pub fn relative_luminance(self) -> f64 {
        fn linear(c: u8) -> f64 {
            let c = c as f64 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r()) + 0.7152 * linear(self.g()) + 0.0722 * linear(self.b())
    }

    /// Whether light text reads better than dark text on this color.
    pub fn is_dark(self) -> bool {
        self.relative_luminance() < 0.179
    }

    /// `#AARRGGBB` form.
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.0)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Error returned when a color string is not `#RRGGBB` or `#AARRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    input: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid color {:?}: expected #RRGGBB or #AARRGGBB",
            self.input
        )
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError {
            input: s.to_string(),
        };
        let digits = s.strip_prefix('#').ok_or_else(err)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| err())?;
        match digits.len() {
            6 => Ok(Color::hex(value)),
            8 => Ok(Color::from_argb_u32(value)),
            _ => Err(err()),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack() {
        let c = Color::argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.a(), 0x12);
        assert_eq!(c.r(), 0x34);
        assert_eq!(c.g(), 0x56);
        assert_eq!(c.b(), 0x78);
        assert_eq!(c.to_argb_u32(), 0x1234_5678);
    }

    #[test]
    fn hex_literal_is_opaque() {
        let c = Color::hex(0x2B2A33);
        assert!(c.is_opaque());
        assert_eq!(c, Color::rgb(0x2B, 0x2A, 0x33));
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let c = Color::hex(0x9059FF).with_alpha(0x52);
        assert_eq!(c.a(), 0x52);
        assert_eq!(c.r(), 0x90);
        assert_eq!(c.b(), 0xFF);
    }

    #[test]
    fn with_opacity_zero_is_transparent_alpha() {
        assert_eq!(Color::WHITE.with_opacity(0.0).a(), 0);
        assert_eq!(Color::WHITE.with_opacity(1.0).a(), 0xFF);
        assert_eq!(Color::WHITE.with_opacity(7.0).a(), 0xFF);
    }

    #[test]
    fn parse_accepts_both_lengths() {
        assert_eq!("#2B2A33".parse::<Color>(), Ok(Color::hex(0x2B2A33)));
        assert_eq!(
            "#802B2A33".parse::<Color>(),
            Ok(Color::from_argb_u32(0x802B_2A33))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("2B2A33".parse::<Color>().is_err());
        assert!("#2B2A3".parse::<Color>().is_err());
        assert!("#+B2A33".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let c = Color::from_argb_u32(0xCC15_141A);
        assert_eq!(c.to_string().parse::<Color>(), Ok(c));
    }

    #[test]
    fn luminance_extremes() {
        assert!(Color::BLACK.relative_luminance() < 1e-9);
        assert!((Color::WHITE.relative_luminance() - 1.0).abs() < 1e-9);
        assert!(Color::BLACK.is_dark());
        assert!(!Color::WHITE.is_dark());
    }
}
