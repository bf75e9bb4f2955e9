//! Core types for the disha-pose algebra.
//!
//! - [`math`]: angle normalization and angular arithmetic
//! - [`Point2D`]: a point in the plane
//! - [`Pose2D`]: rigid transform (position + heading) with ⊕ / ⊖
//! - [`Tolerance`]: translation and angle tolerances for pose comparison

pub mod math;
mod point;
mod pose;
mod tolerance;

pub use math::{angle_diff, normalize_angle};
pub use point::Point2D;
pub use pose::{Pose2D, compose, equals, inverse, ominus};
pub use tolerance::Tolerance;
