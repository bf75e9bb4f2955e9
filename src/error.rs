//! Error types for Disha-Pose

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PoseError>;

/// Pose construction errors.
///
/// The algebra itself is total: only constructors validate, so this is the
/// only error a caller can see from [`crate::Pose2D`] operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PoseError {
    /// Coordinate, angle or tolerance that is NaN, infinite or out of range.
    #[error("Invalid value for `{field}`: {value}")]
    InvalidValue {
        /// Name of the rejected argument.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl PoseError {
    /// Get a short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidValue { .. } => "INVALID_VALUE",
        }
    }
}

/// Reject a non-finite value for the named field.
#[inline]
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("Rejecting non-finite {} = {}", field, value);
        Err(PoseError::InvalidValue { field, value })
    }
}
