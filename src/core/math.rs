// Math utilities and helper functions

use glam::Vec3;

/// Wrap an angle in degrees into the range [0, 360)
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Normalize a direction, returning `None` for zero-length or non-finite input
pub fn direction(v: Vec3) -> Option<Vec3> {
    v.try_normalize()
}

/// Check if two f32 values are approximately equal
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}
