//! Display configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::core::Pose2D;

/// Upper bound on decimal places for rendered poses.
pub(super) const MAX_PRECISION: usize = 17;

/// Pose rendering settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Decimal places for x, y and heading (degrees)
    #[serde(default = "defaults::precision")]
    pub precision: usize,
}

impl DisplaySection {
    /// Render a pose as `(x, y, θ°)` with the configured precision.
    pub fn format(&self, pose: &Pose2D) -> String {
        format!("{:.*}", self.precision, pose)
    }
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            precision: defaults::precision(),
        }
    }
}
