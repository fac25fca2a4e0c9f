//! `CanvasRenderingContext2d` as a drawing backend.
//!
//! Calls that can throw on the JS side (transforms, arcs, text, images) are
//! logged and otherwise ignored, matching the canvas' own habit of silently
//! dropping bad input.

use easel_core::{Backend, Raster, TextAlign};
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

/// An `<img>` element usable as a drawing source.
#[derive(Debug, Clone)]
pub struct WebImage(HtmlImageElement);

impl WebImage {
    pub fn new(element: HtmlImageElement) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &HtmlImageElement {
        &self.0
    }
}

impl From<HtmlImageElement> for WebImage {
    fn from(element: HtmlImageElement) -> Self {
        Self(element)
    }
}

/// Natural size; zero until the image has loaded.
impl Raster for WebImage {
    fn width(&self) -> f64 {
        self.0.natural_width() as f64
    }

    fn height(&self) -> f64 {
        self.0.natural_height() as f64
    }
}

fn report(op: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("canvas {op} failed: {e:?}");
    }
}

impl Backend for WebCanvas {
    type Image = WebImage;

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ctx.set_text_align(align.as_str());
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        report("translate", self.ctx.translate(dx, dy));
    }

    fn rotate(&mut self, angle: f64) {
        report("rotate", self.ctx.rotate(angle));
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        report("scale", self.ctx.scale(sx, sy));
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        report("arc", self.ctx.arc(x, y, radius, start_angle, end_angle));
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.stroke_rect(x, y, w, h);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        report("fill_text", self.ctx.fill_text(text, x, y));
    }

    fn draw_image(&mut self, image: &WebImage, x: f64, y: f64) {
        report(
            "draw_image",
            self.ctx.draw_image_with_html_image_element(&image.0, x, y),
        );
    }

    fn draw_image_region(
        &mut self,
        image: &WebImage,
        sx: f64,
        sy: f64,
        sw: f64,
        sh: f64,
        dx: f64,
        dy: f64,
        dw: f64,
        dh: f64,
    ) {
        report(
            "draw_image_region",
            self.ctx
                .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    &image.0, sx, sy, sw, sh, dx, dy, dw, dh,
                ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_backend<B: Backend<Image = WebImage>>() {}

    #[test]
    fn web_canvas_draws_web_images() {
        assert_backend::<WebCanvas>();
    }
}
