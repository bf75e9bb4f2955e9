//! 2D pose type for robot position and orientation.
//!
//! Coordinate frame follows ROS REP-103:
//! - X-forward, Y-left, Z-up (right-handed)
//! - Counter-clockwise positive rotation

use std::fmt;

use super::math::{angle_diff, angle_lerp, angles_approx_equal, deg_to_rad, normalize_angle};
use super::point::Point2D;
use super::tolerance::Tolerance;
use crate::error::{Result, ensure_finite};

/// A rigid transform in the plane: position plus heading.
///
/// Uses the ROS REP-103 coordinate convention:
/// - Position: (x, y) in meters
/// - Theta: heading angle in radians, counter-clockwise from X-axis,
///   always normalized to (-π, π]
///
/// Poses are immutable values. Fields are only reachable through accessors,
/// so every `Pose2D` has a normalized heading. Constructors reject
/// non-finite input; composing poses whose coordinates approach `f64::MAX`
/// can still overflow to infinity, which [`Pose2D::is_finite`] detects.
///
/// # Composition
///
/// `a.compose(b)` (written `a ⊕ b`) takes `b` expressed in `a`'s frame and
/// returns it in `a`'s parent frame. `a * b` is the same operation.
/// ```
/// use disha_pose::Pose2D;
/// use std::f64::consts::FRAC_PI_2;
///
/// let pose_a = Pose2D::new(1.0, 0.0, FRAC_PI_2).unwrap();
/// let pose_b = Pose2D::new(1.0, 0.0, 0.0).unwrap();
/// let combined = pose_a * pose_b; // 1m forward from pose_a, which faces +Y
/// assert!((combined.x() - 1.0).abs() < 1e-12);
/// assert!((combined.y() - 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Pose2D {
    x: f64,
    y: f64,
    theta: f64,
}

impl Pose2D {
    /// Create a new pose.
    ///
    /// # Arguments
    /// * `x` - X position in meters
    /// * `y` - Y position in meters
    /// * `theta` - Heading angle in radians (normalized to (-π, π])
    ///
    /// # Errors
    /// [`crate::PoseError::InvalidValue`] if any argument is NaN or infinite.
    pub fn new(x: f64, y: f64, theta: f64) -> Result<Self> {
        Ok(Self::from_parts(
            ensure_finite("x", x)?,
            ensure_finite("y", y)?,
            ensure_finite("theta", theta)?,
        ))
    }

    /// Create a new pose with the heading given in degrees.
    pub fn from_degrees(x: f64, y: f64, theta_deg: f64) -> Result<Self> {
        let theta_deg = ensure_finite("theta", theta_deg)?;
        Self::new(x, y, deg_to_rad(theta_deg))
    }

    /// Create a pose from position and angle.
    ///
    /// Validates the point too, since [`Point2D::new`] does not.
    pub fn from_position_angle(position: Point2D, theta: f64) -> Result<Self> {
        Self::new(position.x, position.y, theta)
    }

    /// Identity pose at origin with zero heading.
    #[inline]
    pub const fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }

    /// Build from already-validated components. Only normalizes theta.
    #[inline]
    fn from_parts(x: f64, y: f64, theta: f64) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    /// X position in meters.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y position in meters.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Heading in radians, in (-π, π].
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// True if both coordinates are finite. Only overflow in the algebra
    /// can make this false.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Heading in degrees, in (-180, 180].
    #[inline]
    pub fn theta_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }

    /// Get the position as a Point2D.
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Compose two poses: self ⊕ other
    ///
    /// Applies `other` transform relative to `self` frame.
    /// ```text
    /// C = A ⊕ B:
    ///   C.x = A.x + B.x * cos(A.θ) - B.y * sin(A.θ)
    ///   C.y = A.y + B.x * sin(A.θ) + B.y * cos(A.θ)
    ///   C.θ = normalize(A.θ + B.θ)
    /// ```
    #[inline]
    pub fn compose(&self, other: Pose2D) -> Pose2D {
        let (sin_t, cos_t) = self.theta.sin_cos();
        Self::from_parts(
            self.x + other.x * cos_t - other.y * sin_t,
            self.y + other.x * sin_t + other.y * cos_t,
            self.theta + other.theta,
        )
    }

    /// Inverse of this pose.
    ///
    /// ```text
    /// A⁻¹:
    ///   x = -A.x * cos(A.θ) - A.y * sin(A.θ)
    ///   y =  A.x * sin(A.θ) - A.y * cos(A.θ)
    ///   θ = normalize(-A.θ)
    /// ```
    /// Two-sided: `A ⊕ A⁻¹ = A⁻¹ ⊕ A = identity`.
    #[inline]
    pub fn inverse(&self) -> Pose2D {
        let (sin_t, cos_t) = self.theta.sin_cos();
        Self::from_parts(
            -self.x * cos_t - self.y * sin_t,
            self.x * sin_t - self.y * cos_t,
            -self.theta,
        )
    }

    /// Inverse composition: self ⊖ reference
    ///
    /// Returns this pose expressed in the frame of `reference`, i.e.
    /// `reference⁻¹ ⊕ self`. It undoes composition against the same
    /// reference: `(a ⊕ b) ⊖ a = b`.
    ///
    /// ```
    /// use disha_pose::Pose2D;
    ///
    /// let p1 = Pose2D::from_degrees(1.0, 2.0, 90.0).unwrap();
    /// let p2 = Pose2D::from_degrees(3.0, 0.0, 0.0).unwrap();
    /// let p4 = p1.compose(p2).ominus(p1);
    /// assert!(p4.approx_eq(p2, Default::default()));
    /// ```
    #[inline]
    pub fn ominus(&self, reference: Pose2D) -> Pose2D {
        reference.inverse().compose(*self)
    }

    /// Transform a point from this pose's local frame to the parent frame.
    #[inline]
    pub fn compose_point(&self, point: Point2D) -> Point2D {
        let (sin_t, cos_t) = self.theta.sin_cos();
        Point2D::new(
            self.x + point.x * cos_t - point.y * sin_t,
            self.y + point.x * sin_t + point.y * cos_t,
        )
    }

    /// Transform a point from the parent frame to this pose's local frame.
    #[inline]
    pub fn inverse_compose_point(&self, point: Point2D) -> Point2D {
        let (sin_t, cos_t) = self.theta.sin_cos();
        let dx = point.x - self.x;
        let dy = point.y - self.y;
        Point2D::new(dx * cos_t + dy * sin_t, -dx * sin_t + dy * cos_t)
    }

    /// Euclidean distance between the positions of two poses.
    #[inline]
    pub fn distance_to(&self, other: Pose2D) -> f64 {
        self.position().distance(&other.position())
    }

    /// Distance of the position from the origin.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.position().norm()
    }

    /// The 3x3 homogeneous matrix of this transform (row-major).
    ///
    /// ```text
    /// | cos θ  -sin θ  x |
    /// | sin θ   cos θ  y |
    /// |   0       0    1 |
    /// ```
    pub fn homogeneous_matrix(&self) -> [[f64; 3]; 3] {
        let (sin_t, cos_t) = self.theta.sin_cos();
        [
            [cos_t, -sin_t, self.x],
            [sin_t, cos_t, self.y],
            [0.0, 0.0, 1.0],
        ]
    }

    /// Interpolate between two poses.
    ///
    /// Linear in position, shortest-arc in heading. `t` is clamped to [0, 1].
    /// Position is blended as `a·(1 − t) + b·t`, which stays finite for any
    /// finite endpoints and returns them exactly at `t = 0` and `t = 1`.
    pub fn interpolate(&self, other: Pose2D, t: f64) -> Pose2D {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        Self::from_parts(
            self.x * (1.0 - t) + other.x * t,
            self.y * (1.0 - t) + other.y * t,
            angle_lerp(self.theta, other.theta, t),
        )
    }

    /// Check if this pose is approximately equal to another.
    ///
    /// Translation is compared per axis against `tolerance.translation`;
    /// heading via normalized angle difference against `tolerance.angle`.
    /// Differences must be strictly below the tolerance, so a zero tolerance
    /// never matches.
    #[inline]
    pub fn approx_eq(&self, other: Pose2D, tolerance: Tolerance) -> bool {
        (self.x - other.x).abs() < tolerance.translation
            && (self.y - other.y).abs() < tolerance.translation
            && angles_approx_equal(self.theta, other.theta, tolerance.angle)
    }

    /// Signed heading change from `self` to `other`, in (-π, π].
    #[inline]
    pub fn heading_change_to(&self, other: Pose2D) -> f64 {
        angle_diff(self.theta, other.theta)
    }
}

impl Default for Pose2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Pose2D {
    type Output = Self;

    /// Compose two poses (same as `compose`).
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.compose(rhs)
    }
}

/// Renders `(x, y, θ°)`. Precision defaults to 3 decimals; `{:.N}` overrides.
impl fmt::Display for Pose2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(
            f,
            "({:.p$}, {:.p$}, {:.p$}°)",
            snap_zero(self.x, precision),
            snap_zero(self.y, precision),
            snap_zero(self.theta_degrees(), precision),
            p = precision
        )
    }
}

/// Map values that would print as `-0.000` to `0.0`.
fn snap_zero(value: f64, precision: usize) -> f64 {
    let half_unit = 0.5 * 10f64.powi(-(precision.min(300) as i32));
    if value.abs() < half_unit { 0.0 } else { value }
}

/// Compose two poses: `a ⊕ b`.
#[inline]
pub fn compose(a: Pose2D, b: Pose2D) -> Pose2D {
    a.compose(b)
}

/// Inverse pose: `⊖a`.
#[inline]
pub fn inverse(a: Pose2D) -> Pose2D {
    a.inverse()
}

/// Inverse composition: `a ⊖ b`, the pose `a` expressed in frame `b`.
#[inline]
pub fn ominus(a: Pose2D, b: Pose2D) -> Pose2D {
    a.ominus(b)
}

/// Tolerant pose equality.
///
/// True iff every difference is strictly below its tolerance. Zero,
/// negative or NaN tolerances never match.
#[inline]
pub fn equals(a: Pose2D, b: Pose2D, eps_t: f64, eps_theta: f64) -> bool {
    a.approx_eq(
        b,
        Tolerance {
            translation: eps_t,
            angle: eps_theta,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PoseError;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn pose(x: f64, y: f64, theta: f64) -> Pose2D {
        Pose2D::new(x, y, theta).unwrap()
    }

    fn tight() -> Tolerance {
        Tolerance::new(1e-9, 1e-9).unwrap()
    }

    #[test]
    fn test_new_normalizes_angle() {
        let p = pose(0.0, 0.0, 3.0 * PI);
        assert!(p.theta() > -PI && p.theta() <= PI);
        assert!(p.approx_eq(pose(0.0, 0.0, PI), tight()));

        assert_eq!(pose(0.0, 0.0, -PI).theta(), PI);
        assert_relative_eq!(pose(0.0, 0.0, 2.5 * PI).theta(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(matches!(
            Pose2D::new(f64::NAN, 0.0, 0.0),
            Err(PoseError::InvalidValue { field: "x", .. })
        ));
        assert!(matches!(
            Pose2D::new(0.0, f64::INFINITY, 0.0),
            Err(PoseError::InvalidValue { field: "y", .. })
        ));
        assert!(matches!(
            Pose2D::new(0.0, 0.0, f64::NEG_INFINITY),
            Err(PoseError::InvalidValue { field: "theta", .. })
        ));
        assert!(Pose2D::from_degrees(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_identity() {
        let p = Pose2D::identity();
        assert_eq!(p.x(), 0.0);
        assert_eq!(p.y(), 0.0);
        assert_eq!(p.theta(), 0.0);
        assert!(Pose2D::default().approx_eq(p, tight()));
    }

    #[test]
    fn test_from_degrees() {
        let p = Pose2D::from_degrees(1.0, 2.0, 90.0).unwrap();
        assert_relative_eq!(p.theta(), FRAC_PI_2, epsilon = 1e-15);
        assert_relative_eq!(p.theta_degrees(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_compose() {
        // Translate then rotate
        let translate = pose(1.0, 0.0, 0.0);
        let rotate = pose(0.0, 0.0, FRAC_PI_2);
        let combined = translate.compose(rotate);
        assert!(combined.approx_eq(pose(1.0, 0.0, FRAC_PI_2), tight()));

        // Rotate then translate (in rotated frame)
        let combined2 = rotate.compose(translate);
        assert!(combined2.approx_eq(pose(0.0, 1.0, FRAC_PI_2), tight()));
    }

    #[test]
    fn test_compose_wraps_heading() {
        let a = pose(0.0, 0.0, 0.75 * PI);
        let b = pose(0.0, 0.0, 0.5 * PI);
        let c = a.compose(b);
        assert_relative_eq!(c.theta(), -0.75 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_two_sided() {
        let p = pose(1.0, 2.0, 0.5);
        let inv = p.inverse();
        assert!(p.compose(inv).approx_eq(Pose2D::identity(), tight()));
        assert!(inv.compose(p).approx_eq(Pose2D::identity(), tight()));
    }

    #[test]
    fn test_inverse_of_pi_heading() {
        let p = pose(1.0, 0.0, PI);
        let inv = p.inverse();
        // -π normalizes to +π
        assert_eq!(inv.theta(), PI);
        assert_relative_eq!(inv.x(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ominus_undoes_compose() {
        let a = pose(1.0, 0.0, 0.0);
        let b = pose(2.0, 1.0, FRAC_PI_2);
        let relative = b.ominus(a);
        assert!(a.compose(relative).approx_eq(b, tight()));
        assert!(ominus(b, a).approx_eq(relative, tight()));
    }

    #[test]
    fn test_mul_operator() {
        let a = pose(1.0, 0.0, FRAC_PI_2);
        let b = pose(1.0, 0.0, 0.0);
        assert!((a * b).approx_eq(a.compose(b), tight()));
    }

    #[test]
    fn test_from_position_angle() {
        let p = Pose2D::from_position_angle(Point2D::new(1.0, 2.0), 3.0 * FRAC_PI_2).unwrap();
        assert!(p.approx_eq(pose(1.0, 2.0, -FRAC_PI_2), tight()));
        assert_eq!(p.position(), Point2D::new(1.0, 2.0));

        assert!(matches!(
            Pose2D::from_position_angle(Point2D::new(f64::NAN, 0.0), 0.0),
            Err(PoseError::InvalidValue { field: "x", .. })
        ));
    }

    #[test]
    fn test_interpolate_large_magnitude() {
        let a = pose(1e308, -1e308, 0.0);
        let b = pose(-1e308, 1e308, 0.0);

        // Endpoints come back exactly, midpoint stays finite
        let start = a.interpolate(b, 0.0);
        assert_eq!((start.x(), start.y()), (a.x(), a.y()));
        let end = a.interpolate(b, 1.0);
        assert_eq!((end.x(), end.y()), (b.x(), b.y()));

        let mid = a.interpolate(b, 0.5);
        assert!(mid.is_finite());
        assert_relative_eq!(mid.x(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(mid.y(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_compose_overflow_is_detectable() {
        let far = pose(1e308, 0.0, 0.0);
        assert!(far.is_finite());
        assert!(!far.compose(far).is_finite());
        assert!(!pose(1e308, -1e308, 0.0).ominus(pose(-1e308, 1e308, 0.0)).is_finite());
    }

    #[test]
    fn test_approx_eq_is_strict() {
        let a = pose(0.0, 0.0, 0.0);
        let b = pose(0.5, 0.0, 0.0);
        // Difference equal to the tolerance is not equal
        assert!(!equals(a, b, 0.5, 0.1));
        assert!(equals(a, b, 0.5000001, 0.1));

        let c = pose(0.0, 0.25, 0.0);
        assert!(!equals(a, c, 0.25, 0.1));

        let d = pose(0.0, 0.0, 0.5);
        assert!(!equals(a, d, 0.1, 0.5));
        assert!(equals(a, d, 0.1, 0.5000001));

        // Zero tolerance never matches, not even a pose with itself
        assert!(!equals(a, a, 0.0, 0.0));
        assert!(a.approx_eq(a, tight()));
    }

    #[test]
    fn test_compose_point_round_trip() {
        let p = pose(1.0, 2.0, FRAC_PI_2);
        let world = Point2D::new(3.0, 4.0);

        let local = p.inverse_compose_point(world);
        let back = p.compose_point(local);
        assert_relative_eq!(back.x, world.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-12);

        // 1m forward from a pose facing +Y
        let fwd = p.compose_point(Point2D::new(1.0, 0.0));
        assert_relative_eq!(fwd.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fwd.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_and_norm() {
        let a = pose(0.0, 0.0, 1.0);
        let b = pose(3.0, 4.0, -1.0);
        assert_relative_eq!(a.distance_to(b), 5.0);
        assert_relative_eq!(b.norm(), 5.0);
    }

    #[test]
    fn test_homogeneous_matrix() {
        let m = pose(1.0, 2.0, FRAC_PI_2).homogeneous_matrix();
        assert_relative_eq!(m[0][0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(m[0][1], -1.0, epsilon = 1e-12);
        assert_relative_eq!(m[1][0], 1.0, epsilon = 1e-12);
        assert_eq!(m[0][2], 1.0);
        assert_eq!(m[1][2], 2.0);
        assert_eq!(m[2], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_interpolate() {
        let a = pose(0.0, 0.0, 0.0);
        let b = pose(2.0, 4.0, FRAC_PI_2);

        let mid = a.interpolate(b, 0.5);
        assert!(mid.approx_eq(pose(1.0, 2.0, FRAC_PI_2 / 2.0), tight()));
        assert!(a.interpolate(b, -1.0).approx_eq(a, tight()));
        assert!(a.interpolate(b, 2.0).approx_eq(b, tight()));
    }

    #[test]
    fn test_interpolate_across_pi() {
        let a = pose(0.0, 0.0, 0.9 * PI);
        let b = pose(0.0, 0.0, -0.9 * PI);
        let mid = a.interpolate(b, 0.5);
        assert_relative_eq!(mid.theta().abs(), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_approx_eq() {
        let a = pose(1.0, 2.0, 0.5);
        let b = pose(1.001, 2.001, 0.501);

        assert!(a.approx_eq(b, Tolerance::new(0.01, 0.01).unwrap()));
        assert!(!a.approx_eq(b, Tolerance::new(0.0001, 0.0001).unwrap()));
        assert!(equals(a, b, 0.01, 0.01));
        assert!(!equals(a, b, 0.01, 0.0001));
    }

    #[test]
    fn test_approx_eq_across_pi_boundary() {
        let a = pose(0.0, 0.0, PI - 1e-6);
        let b = pose(0.0, 0.0, -PI + 1e-6);
        assert!(a.approx_eq(b, Tolerance::new(1e-9, 1e-5).unwrap()));
    }

    #[test]
    fn test_heading_change_to() {
        let a = pose(0.0, 0.0, 0.9 * PI);
        let b = pose(0.0, 0.0, -0.9 * PI);
        assert_relative_eq!(a.heading_change_to(b), 0.2 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let p = Pose2D::from_degrees(1.0, 5.0, 90.0).unwrap();
        assert_eq!(p.to_string(), "(1.000, 5.000, 90.000°)");
        assert_eq!(format!("{:.1}", p), "(1.0, 5.0, 90.0°)");
    }

    #[test]
    fn test_display_no_negative_zero() {
        let p = pose(-1e-17, 2.0, -1e-12);
        assert_eq!(p.to_string(), "(0.000, 2.000, 0.000°)");
        assert_eq!(pose(-1.5, 0.0, PI).to_string(), "(-1.500, 0.000, 180.000°)");
    }
}
