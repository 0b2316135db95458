//! Linear two-color gradient along a parameterized axis.
//!
//! The interpolation factor is `t = y / H` (or `x / W` for the horizontal
//! axis), so the last row lands one interpolation step short of the end
//! color — within one rounding unit per channel. A 1-pixel-long axis uses
//! `t = 0`, so there is no division by zero.

use backdrop_core::params::param_color;
use backdrop_core::{Canvas, Palette, Rgb};
use serde_json::Value;

use crate::Style;

/// The axis along which a gradient varies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// Parses an axis name, falling back to `Vertical` for anything
    /// unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name {
            "horizontal" => Axis::Horizontal,
            _ => Axis::Vertical,
        }
    }
}

/// Interpolates from one color to another along a single axis; every line
/// perpendicular to the axis is a single color.
#[derive(Debug, Clone, Copy)]
pub struct Gradient {
    pub from: Rgb,
    pub to: Rgb,
    pub axis: Axis,
}

impl Gradient {
    /// Builds a gradient style from a JSON params object.
    ///
    /// Defaults: background → light_muted, vertical.
    pub fn from_json(palette: &Palette, params: &Value) -> Self {
        let axis = params
            .get("axis")
            .and_then(Value::as_str)
            .map(Axis::from_name)
            .unwrap_or_default();
        Self {
            from: param_color(params, "from", palette.background),
            to: param_color(params, "to", palette.light_muted),
            axis,
        }
    }

    fn factor(position: usize, extent: usize) -> f64 {
        if extent <= 1 {
            0.0
        } else {
            position as f64 / extent as f64
        }
    }
}

impl Style for Gradient {
    fn name(&self) -> &'static str {
        "gradient"
    }

    fn paint(&self, canvas: &mut Canvas) {
        match self.axis {
            Axis::Vertical => {
                let h = canvas.height();
                for y in 0..h {
                    let color = self.from.lerp(self.to, Self::factor(y, h));
                    canvas.fill_row(y, color);
                }
            }
            Axis::Horizontal => {
                let w = canvas.width();
                for x in 0..w {
                    let color = self.from.lerp(self.to, Self::factor(x, w));
                    canvas.fill_column(x, color);
                }
            }
        }
    }
}
