#![deny(unsafe_code)]
//! Background styles for backdrop: one module per visual style, a registry
//! for name-based dispatch, PNG snapshot writing, and the fixed wallpaper
//! batch.
//!
//! Every style is a stateless description of a drawing: given a canvas it
//! paints the whole surface deterministically, with no side effects and no
//! shared state between invocations.

pub mod batch;
pub mod blur;
pub mod checker;
pub mod circles;
pub mod dots;
pub mod gradient;
pub mod snapshot;
pub mod solid;
pub mod waves;

use backdrop_core::error::RasterError;
use backdrop_core::{Canvas, Palette};
use serde_json::Value;

pub use checker::Checker;
pub use circles::Circles;
pub use dots::Dots;
pub use gradient::{Axis, Gradient};
pub use solid::Solid;
pub use waves::Waves;

/// All recognized style names.
const STYLE_NAMES: &[&str] = &["solid", "gradient", "checker", "dots", "waves", "circles"];

/// Core trait for background styles.
///
/// Each style paints an entire canvas in one call. Styles are pure:
/// identical inputs always produce identical pixels.
///
/// This trait is **object-safe**: you can use `Box<dyn Style>` or
/// `&dyn Style` for runtime polymorphism.
pub trait Style {
    /// The style's registry name.
    fn name(&self) -> &'static str;

    /// Paints the whole canvas.
    fn paint(&self, canvas: &mut Canvas);
}

/// Enumeration of all available background styles.
///
/// Wraps each style implementation and delegates [`Style`] trait methods.
/// Use [`StyleKind::from_name`] for string-based construction (CLI).
pub enum StyleKind {
    Solid(Solid),
    Gradient(Gradient),
    Checker(Checker),
    Dots(Dots),
    Waves(Waves),
    Circles(Circles),
}

impl StyleKind {
    /// Constructs a style by name, resolving colors from the palette and
    /// parameters from a JSON object (missing keys fall back to defaults).
    ///
    /// Returns `RasterError::UnknownStyle` if the name is not recognized.
    pub fn from_name(name: &str, palette: &Palette, params: &Value) -> Result<Self, RasterError> {
        match name {
            "solid" => Ok(StyleKind::Solid(Solid::from_json(palette, params))),
            "gradient" => Ok(StyleKind::Gradient(Gradient::from_json(palette, params))),
            "checker" => Ok(StyleKind::Checker(Checker::from_json(palette, params))),
            "dots" => Ok(StyleKind::Dots(Dots::from_json(palette, params))),
            "waves" => Ok(StyleKind::Waves(Waves::from_json(palette, params))),
            "circles" => Ok(StyleKind::Circles(Circles::from_json(palette, params))),
            _ => Err(RasterError::UnknownStyle(name.to_string())),
        }
    }

    /// Returns a slice of all recognized style names.
    pub fn list_styles() -> &'static [&'static str] {
        STYLE_NAMES
    }
}

impl Style for StyleKind {
    fn name(&self) -> &'static str {
        match self {
            StyleKind::Solid(s) => s.name(),
            StyleKind::Gradient(s) => s.name(),
            StyleKind::Checker(s) => s.name(),
            StyleKind::Dots(s) => s.name(),
            StyleKind::Waves(s) => s.name(),
            StyleKind::Circles(s) => s.name(),
        }
    }

    fn paint(&self, canvas: &mut Canvas) {
        match self {
            StyleKind::Solid(s) => s.paint(canvas),
            StyleKind::Gradient(s) => s.paint(canvas),
            StyleKind::Checker(s) => s.paint(canvas),
            StyleKind::Dots(s) => s.paint(canvas),
            StyleKind::Waves(s) => s.paint(canvas),
            StyleKind::Circles(s) => s.paint(canvas),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backdrop_core::Rgb;
    use serde_json::json;

    #[test]
    fn from_name_constructs_every_listed_style() {
        let palette = Palette::neutral();
        for name in StyleKind::list_styles() {
            let style = StyleKind::from_name(name, &palette, &json!({}));
            assert!(style.is_ok(), "style '{name}' failed to construct");
            assert_eq!(style.unwrap().name(), *name);
        }
    }

    #[test]
    fn from_name_unknown_returns_error() {
        let result = StyleKind::from_name("plaid", &Palette::neutral(), &json!({}));
        assert!(matches!(result, Err(RasterError::UnknownStyle(_))));
    }

    #[test]
    fn list_styles_has_no_duplicates() {
        let names = StyleKind::list_styles();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn every_style_paints_deterministically() {
        let palette = Palette::neutral();
        for name in StyleKind::list_styles() {
            let style = StyleKind::from_name(name, &palette, &json!({})).unwrap();
            let mut a = Canvas::new(60, 80, Rgb::new(0, 0, 0)).unwrap();
            let mut b = Canvas::new(60, 80, Rgb::new(0, 0, 0)).unwrap();
            style.paint(&mut a);
            style.paint(&mut b);
            assert_eq!(a.data(), b.data(), "style '{name}' is not deterministic");
        }
    }

    #[test]
    fn object_safety() {
        let style = StyleKind::from_name("solid", &Palette::neutral(), &json!({})).unwrap();
        let boxed: Box<dyn Style> = Box::new(style);
        let mut canvas = Canvas::new(4, 4, Rgb::new(0, 0, 0)).unwrap();
        boxed.paint(&mut canvas);
        assert_eq!(boxed.name(), "solid");
    }

    #[test]
    fn params_flow_through_dispatch() {
        let palette = Palette::neutral();
        let style =
            StyleKind::from_name("solid", &palette, &json!({"color": "#3a5a40"})).unwrap();
        let mut canvas = Canvas::new(2, 2, Rgb::new(0, 0, 0)).unwrap();
        style.paint(&mut canvas);
        assert_eq!(canvas.pixel(0, 0), palette.primary);
    }
}
