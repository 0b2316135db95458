//! Overlapping wave bands filled down to the bottom edge.
//!
//! Each band's top edge is a piecewise-linear curve sampled every
//! `sample_step` pixels, with a sawtooth vertical offset derived from
//! `x mod wavelength`. Bands are drawn in order and each fills from its top
//! curve to the canvas bottom, so later bands overpaint earlier ones where
//! they overlap (painter's algorithm, no alpha).

use backdrop_core::params::{param_color, param_f64, param_usize};
use backdrop_core::{Canvas, Palette, Rgb};
use serde_json::Value;

use crate::Style;

/// Vertical offset of each band's top curve, top band first.
const BAND_OFFSETS: [isize; 3] = [0, 150, 300];
/// Baseline row of the top band.
const DEFAULT_BASE_Y: usize = 200;
/// Sawtooth amplitude in pixels.
const DEFAULT_AMPLITUDE: f64 = 50.0;
/// Sawtooth period in pixels.
const DEFAULT_WAVELENGTH: usize = 200;
/// Horizontal distance between curve samples.
const DEFAULT_SAMPLE_STEP: usize = 20;

/// Three stacked wave bands over a background color.
#[derive(Debug, Clone)]
pub struct Waves {
    pub background: Rgb,
    pub wave: Rgb,
    pub base_y: usize,
    pub amplitude: f64,
    pub wavelength: usize,
    pub sample_step: usize,
}

impl Waves {
    /// Builds a waves style from a JSON params object.
    ///
    /// Defaults: background/accent colors, baseline 200, amplitude 50,
    /// wavelength 200, samples every 20 px.
    pub fn from_json(palette: &Palette, params: &Value) -> Self {
        Self {
            background: param_color(params, "background", palette.background),
            wave: param_color(params, "wave", palette.accent),
            base_y: param_usize(params, "base_y", DEFAULT_BASE_Y),
            amplitude: param_f64(params, "amplitude", DEFAULT_AMPLITUDE),
            wavelength: param_usize(params, "wavelength", DEFAULT_WAVELENGTH).max(1),
            sample_step: param_usize(params, "sample_step", DEFAULT_SAMPLE_STEP).max(1),
        }
    }

    /// Top-curve row at a sample column, before inter-sample interpolation.
    fn sample_y(&self, x: usize, band_offset: isize) -> isize {
        let wavelength = self.wavelength.max(1);
        let phase = (x % wavelength) as f64 / wavelength as f64;
        self.base_y as isize + band_offset + (self.amplitude * phase) as isize
    }
}

impl Style for Waves {
    fn name(&self) -> &'static str {
        "waves"
    }

    fn paint(&self, canvas: &mut Canvas) {
        canvas.fill(self.background);
        let step = self.sample_step.max(1);
        let bottom = canvas.height() as isize;
        for &offset in &BAND_OFFSETS {
            for x in 0..canvas.width() {
                let x0 = x - x % step;
                let y0 = self.sample_y(x0, offset);
                let y1 = self.sample_y(x0 + step, offset);
                let t = (x - x0) as f64 / step as f64;
                let top = (y0 as f64 + (y1 as f64 - y0 as f64) * t) as isize;
                canvas.fill_vspan(x, top, bottom, self.wave);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn style() -> Waves {
        let palette = Palette::neutral();
        Waves {
            background: palette.background,
            wave: palette.accent,
            base_y: 200,
            amplitude: 50.0,
            wavelength: 200,
            sample_step: 20,
        }
    }

    #[test]
    fn region_above_all_bands_is_background() {
        let s = style();
        let mut canvas = Canvas::new(240, 600, Rgb::new(0, 0, 0)).unwrap();
        s.paint(&mut canvas);
        for x in [0, 57, 130, 239] {
            assert_eq!(canvas.pixel(x, 100), s.background, "x={x}");
            assert_eq!(canvas.pixel(x, 0), s.background, "x={x}");
        }
    }

    #[test]
    fn region_below_deepest_band_is_wave_color() {
        let s = style();
        let mut canvas = Canvas::new(240, 600, Rgb::new(0, 0, 0)).unwrap();
        s.paint(&mut canvas);
        // Deepest possible top curve: 200 + 300 + 50 = 550.
        for x in [0, 57, 130, 239] {
            assert_eq!(canvas.pixel(x, 580), s.wave, "x={x}");
            assert_eq!(canvas.pixel(x, 599), s.wave, "x={x}");
        }
    }

    #[test]
    fn top_band_starts_at_baseline_at_phase_zero() {
        let s = style();
        let mut canvas = Canvas::new(240, 600, Rgb::new(0, 0, 0)).unwrap();
        s.paint(&mut canvas);
        assert_eq!(canvas.pixel(0, 199), s.background);
        assert_eq!(canvas.pixel(0, 200), s.wave);
    }

    #[test]
    fn sawtooth_rises_across_the_period() {
        let s = style();
        let mut canvas = Canvas::new(240, 600, Rgb::new(0, 0, 0)).unwrap();
        s.paint(&mut canvas);
        // Half way through the period the curve sits 25 px lower.
        assert_eq!(canvas.pixel(100, 224), s.background);
        assert_eq!(canvas.pixel(100, 225), s.wave);
        // A full period later the curve resets to the baseline.
        assert_eq!(canvas.pixel(200, 199), s.background);
        assert_eq!(canvas.pixel(200, 200), s.wave);
    }

    #[test]
    fn short_canvas_does_not_panic() {
        let s = style();
        // Every curve lies below the canvas; the output is all background.
        let mut canvas = Canvas::new(50, 40, Rgb::new(0, 0, 0)).unwrap();
        s.paint(&mut canvas);
        for y in 0..40 {
            assert_eq!(canvas.pixel(25, y), s.background);
        }
    }

    #[test]
    fn from_json_defaults() {
        let palette = Palette::neutral();
        let s = Waves::from_json(&palette, &json!({}));
        assert_eq!(s.background, palette.background);
        assert_eq!(s.wave, palette.accent);
        assert_eq!(s.base_y, 200);
        assert!((s.amplitude - 50.0).abs() < f64::EPSILON);
        assert_eq!(s.wavelength, 200);
        assert_eq!(s.sample_step, 20);
    }

    #[test]
    fn from_json_overrides_amplitude_and_colors() {
        let palette = Palette::neutral();
        let s = Waves::from_json(
            &palette,
            &json!({"wave": "#588157", "amplitude": 30, "base_y": 100}),
        );
        assert_eq!(s.wave, palette.secondary);
        assert!((s.amplitude - 30.0).abs() < f64::EPSILON);
        assert_eq!(s.base_y, 100);
    }
}
