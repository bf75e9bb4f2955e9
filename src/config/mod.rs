//! Configuration loading for Disha-Pose.
//!
//! Loads comparison tolerances and display settings from a single YAML file
//! with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use disha_pose::config::PoseConfig;
//!
//! // Load from default path (configs/pose.yaml), falling back to defaults
//! let config = PoseConfig::load_default()?;
//!
//! // Tolerance pair for Pose2D::approx_eq
//! let tolerance = config.tolerance();
//! # Ok::<(), disha_pose::config::ConfigLoadError>(())
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`ToleranceSection`] | Translation and angle tolerances for pose equality |
//! | [`DisplaySection`] | Decimal precision of rendered poses |
//!
//! ## Example YAML
//!
//! ```yaml
//! tolerance:
//!   translation: 1.0e-9   # meters
//!   angle: 1.0e-9         # radians
//! display:
//!   precision: 3
//! ```

mod defaults;
mod display;
mod error;
mod pose;
mod tolerance;

pub use display::DisplaySection;
pub use error::ConfigLoadError;
pub use pose::PoseConfig;
pub use tolerance::ToleranceSection;
