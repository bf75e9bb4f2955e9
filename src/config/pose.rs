//! Main PoseConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::display::{DisplaySection, MAX_PRECISION};
use super::error::ConfigLoadError;
use super::tolerance::ToleranceSection;
use crate::core::Tolerance;

/// Default config file location, relative to the working directory.
const DEFAULT_PATH: &str = "configs/pose.yaml";

/// Full Disha-Pose configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PoseConfig {
    /// Comparison tolerances
    #[serde(default)]
    pub tolerance: ToleranceSection,

    /// Rendering settings
    #[serde(default)]
    pub display: DisplaySection,
}

impl PoseConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        log::debug!("Loaded pose config from {}", path.display());
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/pose.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No config at {}, using defaults", DEFAULT_PATH);
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.tolerance
            .to_tolerance()
            .map_err(|e| ConfigLoadError::Invalid(format!("tolerance: {}", e)))?;

        if self.display.precision > MAX_PRECISION {
            return Err(ConfigLoadError::Invalid(format!(
                "display.precision {} exceeds maximum {}",
                self.display.precision, MAX_PRECISION
            )));
        }
        Ok(())
    }

    /// Get the comparison tolerance.
    ///
    /// Falls back to [`Tolerance::default`] if the section was edited into
    /// an invalid state after loading.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance.to_tolerance().unwrap_or_else(|e| {
            log::warn!("Invalid tolerance in config ({}), using defaults", e);
            Tolerance::default()
        })
    }
}
