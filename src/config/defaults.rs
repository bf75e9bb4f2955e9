//! Default value functions for serde deserialization.

use crate::core::Tolerance;

pub fn translation_tolerance() -> f64 {
    Tolerance::DEFAULT_TRANSLATION
}

pub fn angle_tolerance() -> f64 {
    Tolerance::DEFAULT_ANGLE
}

pub fn precision() -> usize {
    3
}
