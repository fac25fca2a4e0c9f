//! In-memory backend that records every call.
//!
//! Stands in for a real canvas in tests. Alongside the raw command log it
//! tracks the backend's current state and transform, so assertions can be
//! made in device space as well as in the coordinates that were passed in.

use crate::backend::{Backend, Raster, TextAlign};
use kurbo::{Affine, Point};

/// A named image with a fixed size.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedImage {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl RecordedImage {
    pub fn new(name: &str, width: f64, height: f64) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
        }
    }
}

impl Raster for RecordedImage {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

/// One backend call, with the arguments it received.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetFillStyle(String),
    SetStrokeStyle(String),
    SetLineWidth(f64),
    SetTextAlign(TextAlign),
    SetGlobalAlpha(f64),
    SetFont(String),
    Translate { dx: f64, dy: f64 },
    Rotate(f64),
    Scale { sx: f64, sy: f64 },
    BeginPath,
    ClosePath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
    Fill,
    Stroke,
    FillRect { x: f64, y: f64, w: f64, h: f64 },
    StrokeRect { x: f64, y: f64, w: f64, h: f64 },
    FillText { text: String, x: f64, y: f64 },
    DrawImage { image: String, x: f64, y: f64 },
    DrawImageRegion {
        image: String,
        sx: f64,
        sy: f64,
        sw: f64,
        sh: f64,
        dx: f64,
        dy: f64,
        dw: f64,
        dh: f64,
    },
}

/// Backend that logs calls instead of painting.
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    commands: Vec<Command>,
    /// Transform in effect when the matching entry of `commands` was issued.
    transforms: Vec<Affine>,
    transform: Affine,
    /// Text anchor in effect when the log was last cleared.
    log_start_align: TextAlign,
    fill_style: String,
    stroke_style: String,
    line_width: f64,
    text_align: TextAlign,
    global_alpha: f64,
    font: String,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            transforms: Vec::new(),
            transform: Affine::IDENTITY,
            log_start_align: TextAlign::Start,
            fill_style: "#000000".to_string(),
            stroke_style: "#000000".to_string(),
            line_width: 1.0,
            text_align: TextAlign::Start,
            global_alpha: 1.0,
            font: crate::font::DEFAULT_FONT.to_string(),
        }
    }
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Forget the command log. Current state and transform are kept.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transforms.clear();
        self.log_start_align = self.text_align;
    }

    pub fn current_transform(&self) -> Affine {
        self.transform
    }

    pub fn fill_style(&self) -> &str {
        &self.fill_style
    }

    pub fn stroke_style(&self) -> &str {
        &self.stroke_style
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    pub fn global_alpha(&self) -> f64 {
        self.global_alpha
    }

    pub fn font(&self) -> &str {
        &self.font
    }

    /// Every painted string with the text anchor in effect when it was
    /// painted.
    pub fn texts(&self) -> impl Iterator<Item = (String, TextAlign)> + '_ {
        self.commands
            .iter()
            .scan(self.log_start_align, |align, cmd| {
                Some(match cmd {
                    Command::SetTextAlign(a) => {
                        *align = *a;
                        None
                    }
                    Command::FillText { text, .. } => Some((text.clone(), *align)),
                    _ => None,
                })
            })
            .flatten()
    }

    /// Device-space points of the `move_to`/`line_to` calls of each path,
    /// one entry per `begin_path`.
    pub fn device_paths(&self) -> Vec<Vec<Point>> {
        let mut paths: Vec<Vec<Point>> = Vec::new();
        for (cmd, xf) in self.commands.iter().zip(&self.transforms) {
            match *cmd {
                Command::BeginPath => paths.push(Vec::new()),
                Command::MoveTo { x, y } | Command::LineTo { x, y } => {
                    if let Some(path) = paths.last_mut() {
                        path.push(*xf * Point::new(x, y));
                    }
                }
                _ => {}
            }
        }
        paths
    }

    /// Device-space top-left corners of every filled or stroked rectangle.
    pub fn device_rect_origins(&self) -> Vec<Point> {
        self.commands
            .iter()
            .zip(&self.transforms)
            .filter_map(|(cmd, xf)| match *cmd {
                Command::FillRect { x, y, .. } | Command::StrokeRect { x, y, .. } => {
                    Some(*xf * Point::new(x, y))
                }
                _ => None,
            })
            .collect()
    }

    fn push(&mut self, cmd: Command) {
        self.commands.push(cmd);
        self.transforms.push(self.transform);
    }
}

impl Backend for RecordingBackend {
    type Image = RecordedImage;

    fn set_fill_style(&mut self, color: &str) {
        self.fill_style = color.to_string();
        self.push(Command::SetFillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.stroke_style = color.to_string();
        self.push(Command::SetStrokeStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
        self.push(Command::SetLineWidth(width));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
        self.push(Command::SetTextAlign(align));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.global_alpha = alpha;
        self.push(Command::SetGlobalAlpha(alpha));
    }

    fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
        self.push(Command::SetFont(font.to_string()));
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.push(Command::Translate { dx, dy });
        self.transform = self.transform * Affine::translate((dx, dy));
    }

    fn rotate(&mut self, angle: f64) {
        self.push(Command::Rotate(angle));
        self.transform = self.transform * Affine::rotate(angle);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.push(Command::Scale { sx, sy });
        self.transform = self.transform * Affine::scale_non_uniform(sx, sy);
    }

    fn begin_path(&mut self) {
        self.push(Command::BeginPath);
    }

    fn close_path(&mut self) {
        self.push(Command::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(Command::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(Command::LineTo { x, y });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.push(Command::Arc {
            x,
            y,
            radius,
            start: start_angle,
            end: end_angle,
        });
    }

    fn fill(&mut self) {
        self.push(Command::Fill);
    }

    fn stroke(&mut self) {
        self.push(Command::Stroke);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.push(Command::FillRect { x, y, w, h });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.push(Command::StrokeRect { x, y, w, h });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.push(Command::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn draw_image(&mut self, image: &RecordedImage, x: f64, y: f64) {
        self.push(Command::DrawImage {
            image: image.name.clone(),
            x,
            y,
        });
    }

    fn draw_image_region(
        &mut self,
        image: &RecordedImage,
        sx: f64,
        sy: f64,
        sw: f64,
        sh: f64,
        dx: f64,
        dy: f64,
        dw: f64,
        dh: f64,
    ) {
        self.push(Command::DrawImageRegion {
            image: image.name.clone(),
            sx,
            sy,
            sw,
            sh,
            dx,
            dy,
            dw,
            dh,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_paths_follow_transform() {
        let mut b = RecordingBackend::new();
        b.translate(10.0, 0.0);
        b.scale(2.0, 2.0);
        b.begin_path();
        b.move_to(1.0, 1.0);
        b.line_to(2.0, 1.0);
        b.stroke();

        assert_eq!(
            b.device_paths(),
            vec![vec![Point::new(12.0, 2.0), Point::new(14.0, 2.0)]]
        );
    }

    #[test]
    fn clear_keeps_state() {
        let mut b = RecordingBackend::new();
        b.set_fill_style("red");
        b.translate(3.0, 4.0);
        b.clear();

        assert!(b.commands().is_empty());
        assert_eq!(b.fill_style(), "red");
        assert_eq!(b.current_transform(), Affine::translate((3.0, 4.0)));
    }

    #[test]
    fn texts_report_active_anchor() {
        let mut b = RecordingBackend::new();
        b.fill_text("a", 0.0, 0.0);
        b.set_text_align(TextAlign::End);
        b.fill_text("b", 0.0, 0.0);

        let texts: Vec<_> = b.texts().collect();
        assert_eq!(
            texts,
            vec![
                ("a".to_string(), TextAlign::Start),
                ("b".to_string(), TextAlign::End),
            ]
        );
    }

    #[test]
    fn texts_after_clear_keep_prior_anchor() {
        let mut b = RecordingBackend::new();
        b.set_text_align(TextAlign::Right);
        b.clear();
        b.fill_text("x", 0.0, 0.0);

        let texts: Vec<_> = b.texts().collect();
        assert_eq!(texts, vec![("x".to_string(), TextAlign::Right)]);
    }
}
