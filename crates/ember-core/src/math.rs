//! 2D helpers and color constants

use glam::{Vec2, Vec4};

pub const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
pub const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);
pub const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
pub const GREEN: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);

/// Unit vector pointing at angle `theta` (radians, counter-clockwise from +x)
pub fn direction_vector(theta: f32) -> Vec2 {
    let (sin, cos) = theta.sin_cos();
    Vec2::new(cos, sin)
}

/// Normalizes `v`, flooring its length at `min_len`.
///
/// Returns the direction and the floored length. A zero vector yields a zero
/// direction rather than NaN.
pub fn safe_normalize_len(v: Vec2, min_len: f32) -> (Vec2, f32) {
    let len = v.length().max(min_len);
    if len <= 0.0 {
        return (Vec2::ZERO, 0.0);
    }
    (v / len, len)
}
