//! Centralized colour palette & the `Color` value used by scene data.
//! Single source of truth for every fill/text colour the scenes use.

use std::{fmt, str::FromStr};

use image::Rgba;
use serde::{Deserialize, Serialize};

/// sRGB triple. Serialized as `#RRGGBB` so scene files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    #[inline]
    pub fn opaque(self) -> Rgba<u8> {
        self.with_alpha(255)
    }

    #[inline]
    pub fn with_alpha(self, a: u8) -> Rgba<u8> {
        let [r, g, b] = self.0;
        Rgba([r, g, b, a])
    }

    /// Per-channel interpolation, truncated toward zero (t is clamped to 0..=1).
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mut out = [0u8; 3];
        for (i, o) in out.iter_mut().enumerate() {
            let a = self.0[i] as f32;
            let b = other.0[i] as f32;
            *o = (a + (b - a) * t) as u8;
        }
        Color(out)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid colour '{s}': expected #RRGGBB"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("invalid colour '{s}': {e}"))
        };
        Ok(Color([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl TryFrom<String> for Color {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

pub const BACKGROUND: Color = Color::rgb(0, 0, 0);
pub const TEXT: Color = Color::rgb(255, 255, 255);
/// Red used for the focus (ORP) letter and filled slider/progress portions.
pub const ACCENT: Color = Color::rgb(255, 59, 48);
pub const BUTTON: Color = Color::rgb(30, 30, 30);
pub const MUTED: Color = Color::rgb(150, 150, 150);
pub const TRACK: Color = Color::rgb(50, 50, 50);
pub const OUTLINE: Color = Color::rgb(80, 80, 80);
pub const SUBLINE: Color = Color::rgb(200, 200, 200);
pub const SHADOW: Color = Color::rgb(0, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!("#FF3B30".parse::<Color>().unwrap(), ACCENT);
        assert_eq!("1a0a0a".parse::<Color>().unwrap(), Color::rgb(0x1A, 0x0A, 0x0A));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#FFF", "#GG0000", "#1234567", "#ééé"] {
            assert!(bad.parse::<Color>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn display_is_upper_hex() {
        assert_eq!(SUBLINE.to_string(), "#C8C8C8");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let txt = ron::to_string(&ACCENT).unwrap();
        assert_eq!(txt, "\"#FF3B30\"");
        let back: Color = ron::from_str("\"#0A0A1A\"").unwrap();
        assert_eq!(back, Color::rgb(10, 10, 26));
        assert!(ron::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn lerp_hits_endpoints() {
        let a = Color::rgb(26, 10, 10);
        let b = Color::rgb(10, 10, 26);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Color::rgb(18, 10, 18));
    }
}
