//! The drawing surface handed to game code every frame.
//!
//! Wraps a [`Backend`] with sticky paint state (color, line width, text
//! anchor, alpha, font) and a cumulative translation/rotation that can always
//! be undone exactly. Every setter writes through to the backend immediately.
//! Values are not validated, so a backend may reject one (a malformed color,
//! say) and keep its previous setting while the surface reports the new one.

use crate::backend::{Backend, Raster, TextAlign};
use crate::font::{DEFAULT_FONT, FontPolicy, resolve_font};
use crate::geometry::{polygon_outline, sprite_cell};
use crate::transform::CumulativeTransform;
use kurbo::Vec2;
use std::f64::consts::{PI, TAU};

/// Line width pushed to the backend at construction.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

/// Canvas default fill/stroke color before any `set_color`.
pub const DEFAULT_COLOR: &str = "#000000";

/// Sticky paint settings. Each value stays in effect until set again.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintState {
    pub color: String,
    pub line_width: f64,
    pub anchor: TextAlign,
    pub alpha: f64,
    pub font: String,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
            anchor: TextAlign::Start,
            alpha: 1.0,
            font: DEFAULT_FONT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaintMode {
    Fill,
    Stroke,
}

/// A stateful 2D drawing surface bound to one backend.
pub struct RenderSurface<B: Backend> {
    backend: B,
    paint: PaintState,
    transform: CumulativeTransform,
    font_policy: FontPolicy,
}

impl<B: Backend> RenderSurface<B> {
    /// Bind a surface to `backend`, pushing the default line width and text
    /// anchor.
    pub fn new(backend: B) -> Self {
        Self::with_font_policy(backend, FontPolicy::default())
    }

    pub fn with_font_policy(mut backend: B, font_policy: FontPolicy) -> Self {
        let paint = PaintState::default();
        backend.set_line_width(paint.line_width);
        backend.set_text_align(paint.anchor);
        Self {
            backend,
            paint,
            transform: CumulativeTransform::new(),
            font_policy,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Direct backend access. Transforms applied through here are invisible
    /// to the cumulative tracking and will not be undone by the resets.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn paint_state(&self) -> &PaintState {
        &self.paint
    }

    // ─── Sticky state ───────────────────────────────────────────────────

    /// Set fill and stroke color together.
    ///
    /// The string is not validated; a backend that cannot parse it keeps its
    /// previous color.
    pub fn set_color(&mut self, color: &str) {
        self.paint.color = color.to_string();
        self.backend.set_fill_style(color);
        self.backend.set_stroke_style(color);
    }

    pub fn color(&self) -> &str {
        &self.paint.color
    }

    /// Any value is forwarded, zero and negative included.
    pub fn set_line_width(&mut self, width: f64) {
        self.paint.line_width = width;
        self.backend.set_line_width(width);
    }

    pub fn line_width(&self) -> f64 {
        self.paint.line_width
    }

    /// Anchor that the x coordinate of later strings refers to.
    pub fn set_string_anchor(&mut self, anchor: TextAlign) {
        self.paint.anchor = anchor;
        self.backend.set_text_align(anchor);
    }

    pub fn string_anchor(&self) -> TextAlign {
        self.paint.anchor
    }

    /// Opacity of later paint operations. Expected in `[0, 1]`; the backend
    /// clamps or ignores anything else.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.paint.alpha = alpha;
        self.backend.set_global_alpha(alpha);
    }

    pub fn alpha(&self) -> f64 {
        self.paint.alpha
    }

    /// Set the font, combined with the current one per the surface's
    /// [`FontPolicy`].
    pub fn set_font(&mut self, font: &str) {
        let resolved = resolve_font(self.font_policy, &self.paint.font, font);
        self.backend.set_font(&resolved);
        self.paint.font = resolved;
    }

    pub fn font(&self) -> &str {
        &self.paint.font
    }

    pub fn font_policy(&self) -> FontPolicy {
        self.font_policy
    }

    pub fn set_font_policy(&mut self, policy: FontPolicy) {
        self.font_policy = policy;
    }

    /// Scale the backend coordinate system uniformly.
    ///
    /// One-shot: meant to be called once at setup. The factor is not tracked,
    /// so neither reset undoes it and repeated calls multiply.
    pub fn set_scale(&mut self, multiplier: f64) {
        self.backend.scale(multiplier, multiplier);
    }

    // ─── Translation ────────────────────────────────────────────────────

    pub fn add_translation(&mut self, dx: f64, dy: f64) {
        self.backend.translate(dx, dy);
        self.transform.add_translation(dx, dy);
    }

    /// Move the origin to `(x, y)` relative to where it was before any
    /// translation.
    pub fn set_translation(&mut self, x: f64, y: f64) {
        self.reset_translation();
        self.add_translation(x, y);
    }

    pub fn reset_translation(&mut self) {
        let total = self.transform.take_translation();
        self.backend.translate(-total.x, -total.y);
    }

    pub fn translation(&self) -> Vec2 {
        self.transform.translation
    }

    // ─── Rotation ───────────────────────────────────────────────────────

    /// Rotate later drawing by `angle` radians. The tracked total is kept in
    /// `[0, 2π)`; a non-finite angle is ignored.
    pub fn add_rotation(&mut self, angle: f64) {
        if !angle.is_finite() {
            log::debug!("skipping non-finite rotation {angle}");
            return;
        }
        self.backend.rotate(angle);
        self.transform.add_rotation(angle);
    }

    pub fn set_rotation(&mut self, angle: f64) {
        self.reset_rotation();
        self.add_rotation(angle);
    }

    pub fn reset_rotation(&mut self) {
        let total = self.transform.take_rotation();
        self.backend.rotate(-total);
    }

    pub fn rotation(&self) -> f64 {
        self.transform.rotation
    }

    // ─── Rectangles ─────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.backend.fill_rect(x, y, w, h);
    }

    pub fn draw_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.backend.stroke_rect(x, y, w, h);
    }

    /// Outline a rectangle with `thickness` for this call only. The sticky
    /// line width is back in effect afterwards.
    pub fn draw_rect_with_thickness(&mut self, x: f64, y: f64, w: f64, h: f64, thickness: f64) {
        self.backend.set_line_width(thickness);
        self.backend.stroke_rect(x, y, w, h);
        self.backend.set_line_width(self.paint.line_width);
    }

    // ─── Circles and arcs ───────────────────────────────────────────────

    pub fn fill_circle(&mut self, x: f64, y: f64, r: f64) {
        self.arc_path(x, y, r, 0.0, TAU, PaintMode::Fill);
    }

    pub fn draw_circle(&mut self, x: f64, y: f64, r: f64) {
        self.arc_path(x, y, r, 0.0, TAU, PaintMode::Stroke);
    }

    /// Angles in radians, swept in the backend's native direction.
    pub fn fill_arc(&mut self, x: f64, y: f64, r: f64, start_angle: f64, end_angle: f64) {
        self.arc_path(x, y, r, start_angle, end_angle, PaintMode::Fill);
    }

    pub fn draw_arc(&mut self, x: f64, y: f64, r: f64, start_angle: f64, end_angle: f64) {
        self.arc_path(x, y, r, start_angle, end_angle, PaintMode::Stroke);
    }

    fn arc_path(&mut self, x: f64, y: f64, r: f64, start: f64, end: f64, mode: PaintMode) {
        self.backend.begin_path();
        self.backend.arc(x, y, r, start, end);
        self.finish_path(mode);
    }

    // ─── Polygons and shapes ────────────────────────────────────────────

    /// Regular polygon with `sides` vertices on a circle of radius `r` around
    /// `(x, y)`. With `rotation == 0` the first vertex points up.
    pub fn fill_polygon(&mut self, x: f64, y: f64, r: f64, sides: u32, rotation: f64) {
        self.polygon_path(x, y, r, sides, rotation, PaintMode::Fill);
    }

    pub fn draw_polygon(&mut self, x: f64, y: f64, r: f64, sides: u32, rotation: f64) {
        self.polygon_path(x, y, r, sides, rotation, PaintMode::Stroke);
    }

    fn polygon_path(
        &mut self,
        x: f64,
        y: f64,
        r: f64,
        sides: u32,
        rotation: f64,
        mode: PaintMode,
    ) {
        if sides == 0 {
            log::debug!("skipping polygon with zero sides at ({x}, {y})");
            return;
        }
        log::trace!("POLYGON {sides} sides r={r} at ({x}, {y}) rot={rotation}");

        let outline = polygon_outline(r, sides);
        let turn = rotation + PI;

        // Local frame only; the cumulative transform is left untouched.
        self.backend.translate(x, y);
        self.backend.rotate(turn);

        self.backend.begin_path();
        self.backend.move_to(outline[0].x, outline[0].y);
        for p in &outline[1..] {
            self.backend.line_to(p.x, p.y);
        }
        self.finish_path(mode);

        self.backend.rotate(-turn);
        self.backend.translate(-x, -y);
    }

    /// Arbitrary polygon through `points` in order. An empty slice paints
    /// nothing.
    pub fn fill_shape(&mut self, points: &[(f64, f64)]) {
        self.shape_path(points, PaintMode::Fill);
    }

    pub fn draw_shape(&mut self, points: &[(f64, f64)]) {
        self.shape_path(points, PaintMode::Stroke);
    }

    fn shape_path(&mut self, points: &[(f64, f64)], mode: PaintMode) {
        let Some(&(x0, y0)) = points.first() else {
            log::debug!("skipping shape with no points");
            return;
        };

        self.backend.begin_path();
        self.backend.move_to(x0, y0);
        for &(x, y) in points {
            self.backend.line_to(x, y);
        }
        self.finish_path(mode);
    }

    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.backend.begin_path();
        self.backend.move_to(x1, y1);
        self.backend.line_to(x2, y2);
        self.backend.stroke();
    }

    fn finish_path(&mut self, mode: PaintMode) {
        match mode {
            PaintMode::Fill => self.backend.fill(),
            PaintMode::Stroke => self.backend.stroke(),
        }
    }

    // ─── Text ───────────────────────────────────────────────────────────

    pub fn draw_string(&mut self, text: &str, x: f64, y: f64) {
        self.backend.fill_text(text, x, y);
    }

    /// Paint `text` anchored by `anchor` for this call only.
    pub fn draw_string_anchored(&mut self, text: &str, x: f64, y: f64, anchor: TextAlign) {
        self.backend.set_text_align(anchor);
        self.backend.fill_text(text, x, y);
        self.backend.set_text_align(self.paint.anchor);
    }

    // ─── Images ─────────────────────────────────────────────────────────

    /// Paint `image` at its native size. An image that has not finished
    /// loading is up to the backend, usually a no-op.
    pub fn draw_image(&mut self, image: &B::Image, x: f64, y: f64) {
        self.backend.draw_image(image, x, y);
    }

    /// Paint one cell of a `cols × rows` sprite sheet, unscaled, with its
    /// top-left at `(x, y)`. `cell_x`/`cell_y` are zero-based and not
    /// range-checked.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_sprite(
        &mut self,
        sheet: &B::Image,
        x: f64,
        y: f64,
        cols: u32,
        rows: u32,
        cell_x: u32,
        cell_y: u32,
    ) {
        let cell = sprite_cell(sheet.width(), sheet.height(), cols, rows, cell_x, cell_y);
        log::trace!("SPRITE cell ({cell_x}, {cell_y}) of {cols}x{rows} at ({x}, {y})");
        self.backend.draw_image_region(
            sheet,
            cell.x0,
            cell.y0,
            cell.width(),
            cell.height(),
            x,
            y,
            cell.width(),
            cell.height(),
        );
    }
}
