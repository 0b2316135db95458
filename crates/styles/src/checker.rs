//! Checkerboard of subtly tinted squares.
//!
//! The canvas is partitioned into squares of side `square_size`; the square
//! at grid coordinates `(i, j)` is tinted when `i + j` is even, by blending
//! the pattern color into the background at a low opacity. Untinted squares
//! stay the plain background color. Trailing partial squares along the right
//! and bottom edges are clipped, not skipped.

use backdrop_core::params::{param_color, param_f64, param_usize};
use backdrop_core::{Canvas, Palette, Rgb};
use serde_json::Value;

use crate::Style;

/// Default square side length in pixels.
const DEFAULT_SQUARE_SIZE: usize = 60;
/// Default tint opacity.
const DEFAULT_OPACITY: f64 = 0.15;

/// Subtle checkerboard over a background color.
#[derive(Debug, Clone, Copy)]
pub struct Checker {
    pub background: Rgb,
    pub pattern: Rgb,
    pub square_size: usize,
    pub opacity: f64,
}

impl Checker {
    /// Builds a checker style from a JSON params object.
    ///
    /// Defaults: background/muted colors, 60 px squares, 0.15 opacity.
    pub fn from_json(palette: &Palette, params: &Value) -> Self {
        Self {
            background: param_color(params, "background", palette.background),
            pattern: param_color(params, "pattern", palette.muted),
            square_size: param_usize(params, "square_size", DEFAULT_SQUARE_SIZE).max(1),
            opacity: param_f64(params, "opacity", DEFAULT_OPACITY),
        }
    }
}

impl Style for Checker {
    fn name(&self) -> &'static str {
        "checker"
    }

    fn paint(&self, canvas: &mut Canvas) {
        canvas.fill(self.background);
        let size = self.square_size.max(1);
        let tint = self.pattern.blend_over(self.background, self.opacity);
        let cols = canvas.width().div_ceil(size);
        let rows = canvas.height().div_ceil(size);
        for j in 0..rows {
            for i in 0..cols {
                if (i + j) % 2 == 0 {
                    canvas.fill_rect(i * size, j * size, size, size, tint);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn style() -> Checker {
        let palette = Palette::neutral();
        Checker {
            background: palette.background,
            pattern: palette.muted,
            square_size: 10,
            opacity: 0.15,
        }
    }

    #[test]
    fn pixels_in_same_square_are_identical() {
        let mut canvas = Canvas::new(45, 35, Rgb::new(0, 0, 0)).unwrap();
        style().paint(&mut canvas);
        // Sample several squares, both tinted and plain.
        for (sx, sy) in [(0, 0), (1, 0), (2, 1), (3, 2)] {
            let base = canvas.pixel(sx * 10, sy * 10);
            for dy in 0..10 {
                for dx in 0..10 {
                    let (x, y) = (sx * 10 + dx, sy * 10 + dy);
                    if x < 45 && y < 35 {
                        assert_eq!(
                            canvas.pixel(x, y),
                            base,
                            "square ({sx}, {sy}) not uniform at ({x}, {y})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn parity_rule_selects_tinted_squares() {
        let s = style();
        let tint = s.pattern.blend_over(s.background, s.opacity);
        let mut canvas = Canvas::new(40, 40, Rgb::new(0, 0, 0)).unwrap();
        s.paint(&mut canvas);
        for j in 0..4 {
            for i in 0..4 {
                let expected = if (i + j) % 2 == 0 { tint } else { s.background };
                assert_eq!(
                    canvas.pixel(i * 10 + 5, j * 10 + 5),
                    expected,
                    "square ({i}, {j}) has wrong color"
                );
            }
        }
    }

    #[test]
    fn edge_sharing_squares_differ() {
        let s = style();
        let mut canvas = Canvas::new(40, 40, Rgb::new(0, 0, 0)).unwrap();
        s.paint(&mut canvas);
        let a = canvas.pixel(5, 5); // (0, 0) tinted
        let b = canvas.pixel(15, 5); // (1, 0) plain
        assert_ne!(a, b, "adjacent squares should differ");
    }

    #[test]
    fn partial_trailing_squares_are_painted() {
        // 45 px wide with 10 px squares leaves a 5 px trailing column (i = 4).
        let s = style();
        let tint = s.pattern.blend_over(s.background, s.opacity);
        let mut canvas = Canvas::new(45, 25, Rgb::new(0, 0, 0)).unwrap();
        s.paint(&mut canvas);
        // (4, 0): 4 + 0 even, tinted even though clipped.
        assert_eq!(canvas.pixel(42, 5), tint);
        // (4, 1): odd, plain background.
        assert_eq!(canvas.pixel(42, 15), s.background);
    }

    #[test]
    fn tint_is_subtle_blend_not_pure_pattern() {
        let s = style();
        let mut canvas = Canvas::new(20, 20, Rgb::new(0, 0, 0)).unwrap();
        s.paint(&mut canvas);
        let tinted = canvas.pixel(5, 5);
        assert_ne!(tinted, s.pattern);
        assert_ne!(tinted, s.background);
    }

    #[test]
    fn from_json_defaults() {
        let palette = Palette::neutral();
        let s = Checker::from_json(&palette, &json!({}));
        assert_eq!(s.background, palette.background);
        assert_eq!(s.pattern, palette.muted);
        assert_eq!(s.square_size, 60);
        assert!((s.opacity - 0.15).abs() < f64::EPSILON);
    }

    #[test]
    fn from_json_zero_square_size_is_bumped_to_one() {
        let palette = Palette::neutral();
        let s = Checker::from_json(&palette, &json!({"square_size": 0}));
        assert_eq!(s.square_size, 1);
    }
}
