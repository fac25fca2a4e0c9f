//! Shape construction helpers shared by the surface primitives.

use kurbo::{Point, Rect};
use smallvec::SmallVec;
use std::f64::consts::TAU;

/// Outline of a regular polygon in its own local frame, centered on the
/// origin.
///
/// Vertex `i` sits at `(sin(step·i)·r, cos(step·i)·r)` with `step = 2π/sides`.
/// The outline visits `sides + 1` points so the last one closes onto the
/// first. The caller rotates the frame by `rotation + π` to put vertex 0 at the
/// top in a y-down coordinate system.
pub fn polygon_outline(radius: f64, sides: u32) -> SmallVec<[Point; 16]> {
    let step = TAU / sides as f64;
    (0..=sides)
        .map(|i| {
            let (sin, cos) = (step * i as f64).sin_cos();
            Point::new(sin * radius, cos * radius)
        })
        .collect()
}

/// Source rectangle of cell `(cell_x, cell_y)` in a sheet of
/// `cols × rows` equally sized cells.
///
/// Indices are not bounds-checked: an out-of-range cell yields a rectangle
/// outside the sheet and the backend decides what that paints.
pub fn sprite_cell(
    sheet_width: f64,
    sheet_height: f64,
    cols: u32,
    rows: u32,
    cell_x: u32,
    cell_y: u32,
) -> Rect {
    let cell_w = sheet_width / cols as f64;
    let cell_h = sheet_height / rows as f64;
    Rect::from_origin_size(
        (cell_x as f64 * cell_w, cell_y as f64 * cell_h),
        (cell_w, cell_h),
    )
}
