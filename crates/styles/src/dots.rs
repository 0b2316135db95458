//! Regular grid of small filled dots.
//!
//! A dot is centered on every intersection of a square grid (including the
//! canvas origin), so dots along the edges are partially clipped.

use backdrop_core::params::{param_color, param_usize};
use backdrop_core::{Canvas, Palette, Rgb};
use serde_json::Value;

use crate::Style;

/// Default dot diameter in pixels.
const DEFAULT_DIAMETER: usize = 8;
/// Default grid spacing in pixels.
const DEFAULT_SPACING: usize = 40;

/// Dot grid over a background color.
#[derive(Debug, Clone, Copy)]
pub struct Dots {
    pub background: Rgb,
    pub dot: Rgb,
    pub diameter: usize,
    pub spacing: usize,
}

impl Dots {
    /// Builds a dots style from a JSON params object.
    ///
    /// Defaults: background/accent colors, 8 px dots every 40 px.
    pub fn from_json(palette: &Palette, params: &Value) -> Self {
        Self {
            background: param_color(params, "background", palette.background),
            dot: param_color(params, "dot", palette.accent),
            diameter: param_usize(params, "diameter", DEFAULT_DIAMETER),
            spacing: param_usize(params, "spacing", DEFAULT_SPACING).max(1),
        }
    }
}

impl Style for Dots {
    fn name(&self) -> &'static str {
        "dots"
    }

    fn paint(&self, canvas: &mut Canvas) {
        canvas.fill(self.background);
        let radius = (self.diameter / 2) as isize;
        let spacing = self.spacing.max(1);
        for cy in (0..canvas.height()).step_by(spacing) {
            for cx in (0..canvas.width()).step_by(spacing) {
                canvas.fill_circle(cx as isize, cy as isize, radius, self.dot);
            }
        }
    }
}
