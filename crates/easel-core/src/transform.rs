//! Cumulative translation/rotation bookkeeping.
//!
//! The backend only knows how to compose deltas. To be able to return to the
//! untransformed origin we keep the running total on our side and apply its
//! inverse on reset.

use kurbo::Vec2;
use std::f64::consts::TAU;

/// Running total of every translation and rotation delta applied since the
/// last reset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CumulativeTransform {
    pub translation: Vec2,
    /// Always within `[0, 2π)`.
    pub rotation: f64,
}

impl CumulativeTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_translation(&mut self, dx: f64, dy: f64) {
        self.translation += Vec2::new(dx, dy);
    }

    /// Return the accumulated translation and zero it.
    pub fn take_translation(&mut self) -> Vec2 {
        std::mem::replace(&mut self.translation, Vec2::ZERO)
    }

    pub fn add_rotation(&mut self, angle: f64) {
        self.rotation = wrap_angle(self.rotation + angle);
    }

    /// Return the accumulated rotation and zero it.
    pub fn take_rotation(&mut self) -> f64 {
        std::mem::replace(&mut self.rotation, 0.0)
    }
}

/// Reduce `angle` into `[0, 2π)`, negative inputs included.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg / 360.0 * TAU
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad / TAU * 360.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn translation_accumulates_and_resets() {
        let mut t = CumulativeTransform::new();
        t.add_translation(10.0, 5.0);
        t.add_translation(-3.0, 2.5);
        assert_eq!(t.translation, Vec2::new(7.0, 7.5));

        let taken = t.take_translation();
        assert_eq!(taken, Vec2::new(7.0, 7.5));
        assert_eq!(t.translation, Vec2::ZERO);
    }

    #[test]
    fn rotation_wraps_past_full_turn() {
        let mut t = CumulativeTransform::new();
        t.add_rotation(1.5 * PI);
        t.add_rotation(PI);
        assert!((t.rotation - 0.5 * PI).abs() < EPS);
    }

    #[test]
    fn negative_rotation_wraps_into_positive_range() {
        let mut t = CumulativeTransform::new();
        t.add_rotation(-0.25 * PI);
        assert!((t.rotation - 1.75 * PI).abs() < EPS);
    }

    #[test]
    fn wrap_angle_stays_in_range() {
        for angle in [-1e-17, -TAU, -7.0 * TAU - 0.1, 0.0, TAU, 123.456, -123.456] {
            let w = wrap_angle(angle);
            assert!((0.0..TAU).contains(&w), "{angle} wrapped to {w}");
        }
    }

    #[test]
    fn degree_radian_conversions() {
        assert!((deg_to_rad(180.0) - PI).abs() < EPS);
        assert!((rad_to_deg(PI) - 180.0).abs() < EPS);
        assert!((deg_to_rad(90.0) - PI / 2.0).abs() < EPS);
        assert!((rad_to_deg(deg_to_rad(37.5)) - 37.5).abs() < EPS);
    }
}
