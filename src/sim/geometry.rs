//! Collision predicates and curve evaluation
//!
//! Everything collides as a sphere or a point. There is no penetration
//! depth or contact normal: callers only need to know whether two volumes
//! touch, and decide the response themselves.

use glam::Vec3;

/// True when `point` lies inside or on the sphere (`center`, `radius`)
#[inline]
pub fn point_in_sphere(point: Vec3, center: Vec3, radius: f32) -> bool {
    point.distance(center) <= radius
}

/// True when `point` is on or above the plane through the origin with `normal`.
///
/// The signed distance is normalized by the normal's length, so the normal
/// need not be unit length. It must not be zero.
#[inline]
pub fn point_side_of_plane(point: Vec3, normal: Vec3) -> bool {
    point.dot(normal) / normal.length() >= 0.0
}

/// True when two spheres touch or overlap
#[inline]
pub fn sphere_sphere_intersect(center_a: Vec3, radius_a: f32, center_b: Vec3, radius_b: f32) -> bool {
    center_a.distance(center_b) <= radius_a + radius_b
}

/// Cubic Bezier in Bernstein form.
///
/// `t` is not clamped; values outside [0, 1] extrapolate the curve.
pub fn bezier_cubic(t: f32, p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Evaluate a cubic Bezier from a control-point array
#[inline]
pub fn bezier_cubic_points(t: f32, points: &[Vec3; 4]) -> Vec3 {
    bezier_cubic(t, points[0], points[1], points[2], points[3])
}
