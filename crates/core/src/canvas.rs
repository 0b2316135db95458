//! Fixed-size RGB pixel buffer with clipped drawing primitives.
//!
//! A `Canvas` stores `width * height` RGB triples in row-major layout. It is
//! created filled with a base color, mutated in place by one generation call,
//! and finalized by a single write through the snapshot path. Primitives that
//! take signed coordinates clip against the canvas bounds, so shapes may
//! extend past any edge.

use crate::color::Rgb;
use crate::error::RasterError;

/// A W×H grid of RGB triples, owned exclusively by one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Canvas {
    /// Creates a canvas of the given dimensions filled with `base`.
    ///
    /// Returns `RasterError::InvalidDimensions` if either dimension is zero
    /// or the pixel count would overflow `usize`.
    pub fn new(width: usize, height: usize, base: Rgb) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(RasterError::InvalidDimensions)?;
        let mut data = Vec::with_capacity(len);
        for _ in 0..width * height {
            data.extend_from_slice(&[base.r, base.g, base.b]);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major RGB data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the underlying row-major RGB data.
    ///
    /// Post-process filters that rewrite the whole buffer (e.g. blur) use
    /// this instead of per-pixel calls.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the canvas and returns the raw RGB byte buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn index(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 3
    }

    /// Returns the color at `(x, y)`.
    ///
    /// Panics if the coordinates are out of bounds; callers reading back
    /// pixels are expected to stay inside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = self.index(x, y);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Sets the color at `(x, y)`, ignoring out-of-bounds coordinates.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.index(x, y);
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
    }

    /// Fills the whole canvas with one color.
    pub fn fill(&mut self, color: Rgb) {
        for px in self.data.chunks_exact_mut(3) {
            px.copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    /// Fills one horizontal row with a single color. Out-of-range rows are ignored.
    pub fn fill_row(&mut self, y: usize, color: Rgb) {
        if y >= self.height {
            return;
        }
        let start = self.index(0, y);
        let end = start + self.width * 3;
        for px in self.data[start..end].chunks_exact_mut(3) {
            px.copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    /// Fills one vertical column with a single color. Out-of-range columns are ignored.
    pub fn fill_column(&mut self, x: usize, color: Rgb) {
        if x >= self.width {
            return;
        }
        for y in 0..self.height {
            let i = self.index(x, y);
            self.data[i] = color.r;
            self.data[i + 1] = color.g;
            self.data[i + 2] = color.b;
        }
    }

    /// Fills the axis-aligned rectangle with origin `(x, y)` and the given
    /// extent, clipped to the canvas.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Rgb) {
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                let i = self.index(col, row);
                self.data[i] = color.r;
                self.data[i + 1] = color.g;
                self.data[i + 2] = color.b;
            }
        }
    }

    /// Fills the part of column `x` spanning rows `[y0, y1)`, clipped to the
    /// canvas. `y0` may be negative and `y1` may exceed the height.
    pub fn fill_vspan(&mut self, x: usize, y0: isize, y1: isize, color: Rgb) {
        if x >= self.width {
            return;
        }
        let top = y0.max(0) as usize;
        let bottom = y1.clamp(0, self.height as isize) as usize;
        for y in top..bottom {
            let i = self.index(x, y);
            self.data[i] = color.r;
            self.data[i + 1] = color.g;
            self.data[i + 2] = color.b;
        }
    }

    /// Fills a circle centered at `(cx, cy)` with the given radius, clipped
    /// to the canvas. The center may lie outside the bounds.
    pub fn fill_circle(&mut self, cx: isize, cy: isize, radius: isize, color: Rgb) {
        if radius < 0 {
            return;
        }
        let w = self.width as isize;
        let h = self.height as isize;
        let y_start = (cy - radius).max(0);
        let y_end = (cy + radius).min(h - 1);
        let r_sq = radius * radius;
        for y in y_start..=y_end {
            let dy = y - cy;
            let x_start = (cx - radius).max(0);
            let x_end = (cx + radius).min(w - 1);
            for x in x_start..=x_end {
                let dx = x - cx;
                if dx * dx + dy * dy <= r_sq {
                    let i = self.index(x as usize, y as usize);
                    self.data[i] = color.r;
                    self.data[i + 1] = color.g;
                    self.data[i + 2] = color.b;
                }
            }
        }
    }
}
