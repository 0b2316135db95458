//! The fixed wallpaper set: nine named background images rendered from the
//! neutral palette.
//!
//! Downstream consumers look these files up by name, so the file stems are
//! part of the external contract and must not change.

use std::fs;
use std::path::{Path, PathBuf};

use backdrop_core::{Canvas, Palette, RasterError, Rgb};

use crate::gradient::Axis;
use crate::{snapshot, Checker, Circles, Dots, Gradient, Solid, Style, StyleKind};

/// Reference canvas width (9:16 mobile ratio).
pub const DEFAULT_WIDTH: usize = 540;
/// Reference canvas height.
pub const DEFAULT_HEIGHT: usize = 960;

/// One entry of the fixed wallpaper set: a file stem, a human-readable
/// label for progress output, and the fully parameterized style.
pub struct WallpaperJob {
    pub file_stem: &'static str,
    pub label: &'static str,
    pub style: StyleKind,
}

/// Returns the fixed nine-job wallpaper set for a palette.
///
/// Order and file stems match the reference output list verbatim.
pub fn wallpaper_set(palette: &Palette) -> Vec<WallpaperJob> {
    vec![
        WallpaperJob {
            file_stem: "bg_white_neutral",
            label: "neutral white",
            style: StyleKind::Solid(Solid {
                color: palette.background,
            }),
        },
        WallpaperJob {
            file_stem: "bg_light_muted",
            label: "very light gray-green",
            style: StyleKind::Solid(Solid {
                color: palette.light_muted,
            }),
        },
        WallpaperJob {
            file_stem: "bg_muted",
            label: "light gray-green",
            style: StyleKind::Solid(Solid {
                color: palette.muted,
            }),
        },
        WallpaperJob {
            file_stem: "bg_gradient_white_muted",
            label: "white to light gradient",
            style: StyleKind::Gradient(Gradient {
                from: palette.background,
                to: palette.light_muted,
                axis: Axis::Vertical,
            }),
        },
        WallpaperJob {
            file_stem: "bg_gradient_light_accent",
            label: "light to accent gradient",
            style: StyleKind::Gradient(Gradient {
                from: palette.light_muted,
                to: palette.accent,
                axis: Axis::Vertical,
            }),
        },
        WallpaperJob {
            file_stem: "bg_pattern_grid_subtle",
            label: "subtle grid pattern",
            style: StyleKind::Checker(Checker {
                background: palette.background,
                pattern: palette.muted,
                square_size: 60,
                opacity: 0.15,
            }),
        },
        WallpaperJob {
            file_stem: "bg_pattern_dots",
            label: "accent dot pattern",
            style: StyleKind::Dots(Dots {
                background: palette.background,
                dot: palette.accent,
                diameter: 8,
                spacing: 40,
            }),
        },
        WallpaperJob {
            file_stem: "bg_circles_accent",
            label: "blurred accent circles",
            style: StyleKind::Circles(Circles {
                background: palette.background,
                circle: palette.accent,
                blur_radius: 2,
            }),
        },
        WallpaperJob {
            file_stem: "bg_circles_muted",
            label: "blurred muted circles",
            style: StyleKind::Circles(Circles {
                background: palette.light_muted,
                circle: palette.muted,
                blur_radius: 2,
            }),
        },
    ]
}

/// Creates the output directory if it does not exist. An already-existing
/// directory is not an error.
pub fn ensure_output_dir(dir: &Path) -> Result<(), RasterError> {
    fs::create_dir_all(dir)
        .map_err(|e| RasterError::Io(format!("creating {}: {e}", dir.display())))
}

/// Renders one job to `<dir>/<file_stem>.png` at the given dimensions and
/// returns the written path.
pub fn render_job(
    job: &WallpaperJob,
    width: usize,
    height: usize,
    dir: &Path,
) -> Result<PathBuf, RasterError> {
    let mut canvas = Canvas::new(width, height, Rgb::new(0, 0, 0))?;
    job.style.paint(&mut canvas);
    let path = dir.join(format!("{}.png", job.file_stem));
    snapshot::write_png(&canvas, &path)?;
    Ok(path)
}
