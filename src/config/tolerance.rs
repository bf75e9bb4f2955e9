//! Tolerance configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::core::Tolerance;
use crate::error::Result;

/// Pose comparison tolerances
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToleranceSection {
    /// Per-axis translation tolerance (meters)
    #[serde(default = "defaults::translation_tolerance")]
    pub translation: f64,

    /// Heading tolerance (radians)
    #[serde(default = "defaults::angle_tolerance")]
    pub angle: f64,
}

impl ToleranceSection {
    /// Convert to a validated [`Tolerance`].
    pub fn to_tolerance(&self) -> Result<Tolerance> {
        Tolerance::new(self.translation, self.angle)
    }
}

impl Default for ToleranceSection {
    fn default() -> Self {
        Self {
            translation: defaults::translation_tolerance(),
            angle: defaults::angle_tolerance(),
        }
    }
}
