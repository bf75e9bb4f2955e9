//! Mathematical primitives for SE(2) operations.
//!
//! All angles are in radians. Coordinate frame follows ROS REP-103:
//! - X-forward, Y-left, Z-up
//! - Counter-clockwise positive rotation

use std::f64::consts::{PI, TAU};

/// Normalize angle to (-π, π].
///
/// `-π` maps to `+π`, so every heading has exactly one representative.
///
/// # Example
/// ```
/// use disha_pose::core::math::normalize_angle;
/// use std::f64::consts::PI;
///
/// assert_eq!(normalize_angle(-PI), PI);
/// assert!((normalize_angle(3.0 * PI).abs() - PI).abs() < 1e-12);
/// assert!((normalize_angle(PI / 2.0) - PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % TAU;
    if a > PI {
        a -= TAU;
    } else if a <= -PI {
        a += TAU;
    }
    a
}

/// Shortest signed angular difference from `from` to `to`, in (-π, π].
///
/// Positive result means counter-clockwise rotation from `from` to `to`.
///
/// # Example
/// ```
/// use disha_pose::core::math::angle_diff;
/// use std::f64::consts::PI;
///
/// // Crossing the ±π boundary takes the short way
/// let diff = angle_diff(PI - 0.1, -PI + 0.1);
/// assert!((diff - 0.2).abs() < 1e-12);
/// ```
#[inline]
pub fn angle_diff(from: f64, to: f64) -> f64 {
    normalize_angle(to - from)
}

/// Check if two angles differ by strictly less than `tolerance`.
///
/// Handles wrap-around at ±π correctly.
#[inline]
pub fn angles_approx_equal(a: f64, b: f64, tolerance: f64) -> bool {
    angle_diff(a, b).abs() < tolerance
}

/// Linear interpolation between two angles, taking the shortest path.
#[inline]
pub fn angle_lerp(a: f64, b: f64, t: f64) -> f64 {
    normalize_angle(a + angle_diff(a, b) * t)
}

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}
