//! Error types for the backdrop core.

use thiserror::Error;

/// Errors produced by raster operations.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Width or height was zero (or overflowed) when creating a canvas.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A style name was not recognized by the registry.
    #[error("unknown style: {0}")]
    UnknownStyle(String),

    /// An I/O failure while writing an output file.
    #[error("io error: {0}")]
    Io(String),
}
