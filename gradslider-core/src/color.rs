//! Rgba — normalized color with per-channel interpolation.
//!
//! Components are `f64` in `[0, 1]`. Colors serialize as hex strings
//! (`#RRGGBB` or `#RRGGBBAA`) so config files stay readable, and deserialize
//! from either hex or an `{ r, g, b, a }` table. Fields that must survive a
//! round trip exactly use [`lossless`], which writes the components.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Normalized RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const CLEAR: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const GRAY: Rgba = Rgba::new(0.5, 0.5, 0.5, 1.0);
    pub const LIGHT_GRAY: Rgba = Rgba::new(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0);
    pub const DARK_GRAY: Rgba = Rgba::new(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 1.0);
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    pub const BLUE: Rgba = Rgba::new(0.0, 0.0, 1.0, 1.0);
    pub const ORANGE: Rgba = Rgba::new(1.0, 0.5, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Linear interpolation per channel. `t` is not clamped.
    pub fn lerp(from: Rgba, to: Rgba, t: f64) -> Rgba {
        Rgba {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Quantize to 8-bit channels, clamping out-of-range components.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn q(c: f64) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let [r, g, b, _] = self.to_rgba8();
        (r, g, b)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        )
    }

    /// `#RRGGBB` when fully opaque, `#RRGGBBAA` otherwise.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color {0:?} must start with '#'")]
    MissingHash(String),

    #[error("color {0:?} must have 6 or 8 hex digits")]
    BadLength(String),

    #[error("color {0:?} contains a non-hex digit")]
    BadDigit(String),
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::BadLength(s.to_string()));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }

        let channel = |i: usize| -> Result<u8, ColorError> {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::BadDigit(s.to_string()))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Rgba::from_rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Component form on the wire. `a` defaults to opaque.
#[derive(Serialize, Deserialize)]
struct Components {
    r: f64,
    g: f64,
    b: f64,
    #[serde(default = "opaque_alpha")]
    a: f64,
}

fn opaque_alpha() -> f64 {
    1.0
}

impl From<Rgba> for Components {
    fn from(c: Rgba) -> Self {
        Components { r: c.r, g: c.g, b: c.b, a: c.a }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Hex(String),
    Components(Components),
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Hex(raw) => raw.parse().map_err(serde::de::Error::custom),
            Repr::Components(c) => Ok(Rgba::new(c.r, c.g, c.b, c.a)),
        }
    }
}

/// `#[serde(with)]` adapter for `Option<Rgba>` that writes full-precision
/// components instead of 8-bit hex. Reads either form.
pub mod lossless {
    use super::*;

    pub fn serialize<S: Serializer>(color: &Option<Rgba>, serializer: S) -> Result<S::Ok, S::Error> {
        color.map(Components::from).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Rgba>, D::Error> {
        Option::<Rgba>::deserialize(deserializer)
    }
}
