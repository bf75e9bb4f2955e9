//! # Disha-Pose
//!
//! SE(2) pose algebra for 2D robot navigation: rigid transforms in the plane
//! with composition (⊕) and inverse-composition (⊖).
//!
//! ## Quick Start
//!
//! ```rust
//! use disha_pose::Pose2D;
//!
//! # fn main() -> disha_pose::Result<()> {
//! let p1 = Pose2D::from_degrees(1.0, 2.0, 90.0)?;
//! let p2 = Pose2D::from_degrees(3.0, 0.0, 0.0)?;
//!
//! // p2 is expressed in p1's frame; p3 is the same pose in the global frame
//! let p3 = p1.compose(p2);
//! assert!(disha_pose::equals(p3, Pose2D::from_degrees(1.0, 5.0, 90.0)?, 1e-9, 1e-9));
//!
//! // Recover p2 by expressing p3 in p1's frame
//! let p4 = p3.ominus(p1);
//! assert!(disha_pose::equals(p4, p2, 1e-9, 1e-9));
//!
//! println!("p1(+)p2        : {}", p3);
//! println!("(p1(+)p2)(-)p1 : {}", p4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! Uses ROS REP-103 convention:
//! - X: Forward (positive ahead of robot)
//! - Y: Left (positive to robot's left)
//! - Theta: Rotation in radians, CCW positive from +X axis, kept in (-π, π]
//!
//! ## Architecture
//!
//! - [`core`]: angle math, [`Point2D`], [`Pose2D`], [`Tolerance`]
//! - [`config`]: YAML configuration for tolerances and display precision
//! - [`trajectory`]: chaining and differencing pose sequences
//! - [`error`]: error types

#![warn(missing_docs)]

// Core types
pub mod core;

// Unified configuration
pub mod config;

// Error types
pub mod error;

// Pose sequences (odometry chaining)
pub mod trajectory;

// Re-export commonly used types
pub use crate::core::{Point2D, Pose2D, Tolerance, compose, equals, inverse, ominus};
pub use error::{PoseError, Result};
