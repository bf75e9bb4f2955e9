//! Comparison tolerances for poses.

use crate::error::{PoseError, Result};

/// Translation and angle tolerances used by [`crate::Pose2D::approx_eq`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    /// Per-axis translation differences must be strictly below this (meters).
    pub translation: f64,
    /// Heading difference must be strictly below this (radians).
    pub angle: f64,
}

impl Tolerance {
    /// Default translation tolerance (meters).
    pub const DEFAULT_TRANSLATION: f64 = 1e-9;

    /// Default angle tolerance (radians).
    pub const DEFAULT_ANGLE: f64 = 1e-9;

    /// Create a tolerance pair. Both values must be finite and non-negative.
    pub fn new(translation: f64, angle: f64) -> Result<Self> {
        Ok(Self {
            translation: non_negative("translation", translation)?,
            angle: non_negative("angle", angle)?,
        })
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            translation: Self::DEFAULT_TRANSLATION,
            angle: Self::DEFAULT_ANGLE,
        }
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PoseError::InvalidValue { field, value })
    }
}
