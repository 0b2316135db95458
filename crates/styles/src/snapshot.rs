//! PNG persistence for a rendered [`Canvas`].

use backdrop_core::{Canvas, RasterError};
use std::path::Path;

/// Writes a canvas as an RGB PNG file.
///
/// Returns `RasterError::InvalidDimensions` if the canvas dimensions
/// overflow `u32`, or `RasterError::Io` on write failure.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), RasterError> {
    let w = u32::try_from(canvas.width()).map_err(|_| RasterError::InvalidDimensions)?;
    let h = u32::try_from(canvas.height()).map_err(|_| RasterError::InvalidDimensions)?;
    let img = image::RgbImage::from_raw(w, h, canvas.data().to_vec())
        .ok_or_else(|| RasterError::Io("RGB buffer size mismatch".into()))?;
    img.save(path).map_err(|e| RasterError::Io(e.to_string()))
}
