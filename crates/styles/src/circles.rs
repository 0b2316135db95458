//! Large overlapping circles softened by a Gaussian blur.
//!
//! Four big filled circles are placed relative to the canvas corners and
//! center — two of them centered outside the bounds — and the whole canvas
//! is then blurred as a post-process to soften their edges.

use backdrop_core::params::{param_color, param_usize};
use backdrop_core::{Canvas, Palette, Rgb};
use serde_json::Value;

use crate::blur::gaussian_blur;
use crate::Style;

/// Default blur radius applied after drawing.
const DEFAULT_BLUR_RADIUS: usize = 2;

/// Blurred circle composition over a background color.
#[derive(Debug, Clone, Copy)]
pub struct Circles {
    pub background: Rgb,
    pub circle: Rgb,
    pub blur_radius: usize,
}

impl Circles {
    /// Builds a circles style from a JSON params object.
    ///
    /// Defaults: background/accent colors, blur radius 2.
    pub fn from_json(palette: &Palette, params: &Value) -> Self {
        Self {
            background: param_color(params, "background", palette.background),
            circle: param_color(params, "circle", palette.accent),
            blur_radius: param_usize(params, "blur_radius", DEFAULT_BLUR_RADIUS),
        }
    }

    /// Circle placements `(cx, cy, radius)` for a canvas of the given size.
    ///
    /// The first two circles hang off the top-left and bottom-right corners,
    /// the third sits just left of center, the fourth in the lower left.
    fn placements(width: usize, height: usize) -> [(isize, isize, isize); 4] {
        let w = width as isize;
        let h = height as isize;
        [
            (-80, -100, 250),
            (w + 60, h + 50, 300),
            (w / 2 - 50, h / 2, 200),
            (100, h - 150, 150),
        ]
    }
}

impl Style for Circles {
    fn name(&self) -> &'static str {
        "circles"
    }

    fn paint(&self, canvas: &mut Canvas) {
        canvas.fill(self.background);
        for (cx, cy, r) in Self::placements(canvas.width(), canvas.height()) {
            canvas.fill_circle(cx, cy, r, self.circle);
        }
        gaussian_blur(canvas, self.blur_radius);
    }
}
