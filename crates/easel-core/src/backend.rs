//! Immediate-mode drawing backend abstraction.
//!
//! Mirrors the subset of a 2D canvas context the surface needs. Every call is
//! fire-and-forget: a backend that cannot honour a request (malformed color,
//! unloaded image, negative radius) decides for itself what happens, usually
//! nothing.

use std::fmt;
use std::str::FromStr;

/// Anything with a pixel size that a backend can paint.
pub trait Raster {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
}

/// Horizontal anchor used when painting text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
    Left,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(format!("unknown text anchor `{other}`")),
        }
    }
}

/// A 2D immediate-mode drawing context.
///
/// Coordinates are in the backend's current user space: every `translate`,
/// `rotate` and `scale` composes onto the transform applied to later calls.
pub trait Backend {
    type Image: Raster;

    // ── State ──
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_font(&mut self, font: &str);

    // ── Transform ──
    fn translate(&mut self, dx: f64, dy: f64);
    fn rotate(&mut self, angle: f64);
    fn scale(&mut self, sx: f64, sy: f64);

    // ── Paths ──
    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    // ── Immediate paint ──
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Paint `image` at its native size with its top-left at `(x, y)`.
    fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64);

    /// Crop `(sx, sy, sw, sh)` out of `image` and paint it into
    /// `(dx, dy, dw, dh)`.
    #[allow(clippy::too_many_arguments)]
    fn draw_image_region(
        &mut self,
        image: &Self::Image,
        sx: f64,
        sy: f64,
        sw: f64,
        sh: f64,
        dx: f64,
        dy: f64,
        dw: f64,
        dh: f64,
    );
}
