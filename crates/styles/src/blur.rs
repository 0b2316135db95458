//! Separable Gaussian blur over a whole canvas.
//!
//! Two 1-D passes (horizontal, then vertical) with a normalized kernel and
//! clamped edge sampling. Normalization keeps the overall color balance
//! unchanged; only edges get softened.

use backdrop_core::Canvas;

/// Builds a normalized 1-D Gaussian kernel of half-width `radius`.
///
/// Sigma is half the radius (minimum 0.5), a conventional choice that keeps
/// the tails within the kernel window.
fn kernel(radius: usize) -> Vec<f64> {
    let sigma = (radius as f64 / 2.0).max(0.5);
    let denom = 2.0 * sigma * sigma;
    let mut weights: Vec<f64> = (-(radius as isize)..=radius as isize)
        .map(|i| (-((i * i) as f64) / denom).exp())
        .collect();
    let sum: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

/// Applies a Gaussian blur of the given radius to the canvas in place.
///
/// `radius == 0` is a no-op. Edge pixels are sampled with clamping, so the
/// image does not darken toward the borders.
pub fn gaussian_blur(canvas: &mut Canvas, radius: usize) {
    if radius == 0 {
        return;
    }
    let weights = kernel(radius);
    let w = canvas.width();
    let h = canvas.height();
    let r = radius as isize;

    // Horizontal pass into a scratch buffer.
    let src = canvas.data().to_vec();
    let mut horizontal = vec![0u8; src.len()];
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f64; 3];
            for (k, weight) in weights.iter().enumerate() {
                let sx = (x as isize + k as isize - r).clamp(0, w as isize - 1) as usize;
                let i = (y * w + sx) * 3;
                acc[0] += src[i] as f64 * weight;
                acc[1] += src[i + 1] as f64 * weight;
                acc[2] += src[i + 2] as f64 * weight;
            }
            let o = (y * w + x) * 3;
            for c in 0..3 {
                horizontal[o + c] = acc[c].round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    // Vertical pass back into the canvas.
    let out = canvas.data_mut();
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0.0f64; 3];
            for (k, weight) in weights.iter().enumerate() {
                let sy = (y as isize + k as isize - r).clamp(0, h as isize - 1) as usize;
                let i = (sy * w + x) * 3;
                acc[0] += horizontal[i] as f64 * weight;
                acc[1] += horizontal[i + 1] as f64 * weight;
                acc[2] += horizontal[i + 2] as f64 * weight;
            }
            let o = (y * w + x) * 3;
            for c in 0..3 {
                out[o + c] = acc[c].round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}
