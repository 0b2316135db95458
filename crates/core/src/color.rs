//! The 8-bit RGB color type and its blending arithmetic.
//!
//! All channel math happens in `f64` and is truncated back into [0, 255]
//! before narrowing to `u8`, so no operation can produce an out-of-range
//! channel value.

use crate::error::RasterError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGB color with 8-bit channels.
///
/// Serializes as a hex string `"#rrggbb"` for human-readable formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from explicit channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#a3b18a" or "a3b18a" (case insensitive).
    ///
    /// Returns `RasterError::InvalidColor` naming the offending input if it
    /// is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb, RasterError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(RasterError::InvalidColor(format!(
                "'{hex}': expected 6 hex digits"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| {
                RasterError::InvalidColor(format!("'{hex}': invalid {name} component: {e}"))
            })
        };
        Ok(Rgb {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Formats the color as a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linearly interpolates each channel from `self` toward `other`.
    ///
    /// `t` is clamped to [0, 1] (NaN maps to 0). Channel values are
    /// truncated to integers, matching `c1 + (c2 - c1) * t` arithmetic.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Blends `self` over `base` at the given opacity.
    ///
    /// Computes `self * opacity + base * (1 - opacity)` per channel with
    /// opacity clamped to [0, 1]. Equivalent to `base.lerp(self, opacity)`
    /// up to rounding; kept separate because tint opacities read better at
    /// call sites.
    pub fn blend_over(self, base: Rgb, opacity: f64) -> Rgb {
        let opacity = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        let mix = |top: u8, bottom: u8| {
            let v = top as f64 * opacity + bottom as f64 * (1.0 - opacity);
            v.clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(self.r, base.r),
            g: mix(self.g, base.g),
            b: mix(self.b, base.b),
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
