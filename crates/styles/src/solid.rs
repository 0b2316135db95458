//! Solid fill: every pixel gets one color.

use backdrop_core::params::param_color;
use backdrop_core::{Canvas, Palette, Rgb};
use serde_json::Value;

use crate::Style;

/// Fills the whole canvas with a single color.
#[derive(Debug, Clone, Copy)]
pub struct Solid {
    pub color: Rgb,
}

impl Solid {
    /// Builds a solid style from a JSON params object.
    ///
    /// `color` defaults to the palette background.
    pub fn from_json(palette: &Palette, params: &Value) -> Self {
        Self {
            color: param_color(params, "color", palette.background),
        }
    }
}

impl Style for Solid {
    fn name(&self) -> &'static str {
        "solid"
    }

    fn paint(&self, canvas: &mut Canvas) {
        canvas.fill(self.color);
    }
}
