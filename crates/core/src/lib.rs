#![deny(unsafe_code)]
//! Core types for the backdrop background generator.
//!
//! Provides the `Rgb` color type (8-bit channels, hex parsing, blending),
//! the role-named `Palette`, the `Canvas` pixel buffer with clipped drawing
//! primitives, `RasterError`, and JSON parameter helpers.

pub mod canvas;
pub mod color;
pub mod error;
pub mod palette;
pub mod params;

pub use canvas::Canvas;
pub use color::Rgb;
pub use error::RasterError;
pub use palette::Palette;
