//! The extension point for game content.

use crate::input::{KeyEvent, MouseEvent};
use easel_core::{Backend, RenderSurface};

/// A game object driven by the scheduler and the input dispatcher.
///
/// `draw` and `update` run once per tick, in that order. The input methods
/// are called between ticks, never during one, and default to doing nothing.
/// Mouse handlers receive the position already divided by the configured
/// scale.
pub trait Drawable<B: Backend> {
    fn draw(&mut self, g: &mut RenderSurface<B>);

    fn update(&mut self);

    fn key_pressed(&mut self, _event: &KeyEvent) {}

    fn key_released(&mut self, _event: &KeyEvent) {}

    fn mouse_clicked(&mut self, _event: &MouseEvent, _x: f64, _y: f64) {}

    fn mouse_moved(&mut self, _event: &MouseEvent, _x: f64, _y: f64) {}
}
