//! Point types and small vector helpers.
//!
//! Points are plain arrays so hosts can convert to their own vector types
//! without pulling a math crate into the core.

/// A 3D point in world space.
pub type WorldPoint = [f32; 3];

/// A 2D viewport position, only ever used for distance measurement.
pub type ScreenPoint = [f32; 2];

#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn scale_vec3(v: [f32; 3], s: f32) -> [f32; 3] {
    [v[0] * s, v[1] * s, v[2] * s]
}

/// Euclidean distance between two screen points.
#[inline]
pub fn distance_vec2(a: ScreenPoint, b: ScreenPoint) -> f32 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    (dx * dx + dy * dy).sqrt()
}
