//! The fixed role-named palette shared by all background styles.
//!
//! Unlike a gradient ramp, this palette is a mapping from semantic roles
//! (background, primary, ...) to colors; styles pick roles by field access
//! and the CLI resolves role names given as strings.

use crate::color::Rgb;
use crate::error::RasterError;
use serde::{Deserialize, Serialize};

/// All recognized role names, in canonical order.
const ROLE_NAMES: &[&str] = &[
    "background",
    "primary",
    "secondary",
    "accent",
    "muted",
    "light_muted",
];

/// A fixed mapping from semantic color roles to [`Rgb`] values.
///
/// Immutable for the process lifetime once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
    pub muted: Rgb,
    pub light_muted: Rgb,
}

impl Palette {
    /// Creates a palette from six hex strings in canonical role order
    /// (background, primary, secondary, accent, muted, light_muted).
    ///
    /// Returns `RasterError::InvalidPalette` for a wrong count and
    /// `RasterError::InvalidColor` for an unparseable entry.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, RasterError> {
        if hexes.len() != ROLE_NAMES.len() {
            return Err(RasterError::InvalidPalette(format!(
                "expected {} colors, got {}",
                ROLE_NAMES.len(),
                hexes.len()
            )));
        }
        Ok(Self {
            background: Rgb::from_hex(hexes[0])?,
            primary: Rgb::from_hex(hexes[1])?,
            secondary: Rgb::from_hex(hexes[2])?,
            accent: Rgb::from_hex(hexes[3])?,
            muted: Rgb::from_hex(hexes[4])?,
            light_muted: Rgb::from_hex(hexes[5])?,
        })
    }

    /// The neutral green theme the wallpaper set ships with.
    pub fn neutral() -> Self {
        Self::from_hex(&[
            "#F5F8F7", // light bg
            "#3A5A40", // dark green
            "#588157", // medium green
            "#A3B18A", // light green / kaki
            "#C8CEC2", // muted gray-green
            "#E8EDE8", // very light
        ])
        .expect("neutral palette hex values are valid")
    }

    /// Looks up a color by role name. Returns `None` for unknown roles.
    pub fn get(&self, role: &str) -> Option<Rgb> {
        match role {
            "background" => Some(self.background),
            "primary" => Some(self.primary),
            "secondary" => Some(self.secondary),
            "accent" => Some(self.accent),
            "muted" => Some(self.muted),
            "light_muted" => Some(self.light_muted),
            _ => None,
        }
    }

    /// Returns a slice of all recognized role names.
    pub fn list_roles() -> &'static [&'static str] {
        ROLE_NAMES
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::neutral()
    }
}
