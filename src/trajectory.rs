//! Pose sequences: chaining odometry increments and differencing trajectories.
//!
//! # Example
//!
//! ```rust
//! use disha_pose::Pose2D;
//! use disha_pose::trajectory::{compose_chain, relative_deltas};
//! use std::f64::consts::FRAC_PI_2;
//!
//! // Drive 1m, turn left, drive 1m
//! let steps = [
//!     Pose2D::new(1.0, 0.0, FRAC_PI_2).unwrap(),
//!     Pose2D::new(1.0, 0.0, 0.0).unwrap(),
//! ];
//! let end = compose_chain(steps);
//! assert!((end.x() - 1.0).abs() < 1e-12);
//! assert!((end.y() - 1.0).abs() < 1e-12);
//!
//! let deltas = relative_deltas(&[Pose2D::identity(), end]);
//! assert_eq!(deltas.len(), 1);
//! ```

use log::trace;

use crate::core::Pose2D;

/// Compose a sequence of increments left to right, starting at identity.
///
/// Returns `identity ⊕ d₀ ⊕ d₁ ⊕ …`. An empty sequence yields identity.
pub fn compose_chain<I>(increments: I) -> Pose2D
where
    I: IntoIterator<Item = Pose2D>,
{
    increments
        .into_iter()
        .fold(Pose2D::identity(), |acc, delta| acc.compose(delta))
}

/// Relative motion between consecutive poses: `poses[i+1] ⊖ poses[i]`.
///
/// Each delta is expressed in the frame of the earlier pose, so the result
/// is independent of where the trajectory sits in the world.
pub fn relative_deltas(poses: &[Pose2D]) -> Vec<Pose2D> {
    let deltas: Vec<Pose2D> = poses
        .windows(2)
        .map(|pair| pair[1].ominus(pair[0]))
        .collect();
    trace!(
        "Computed {} relative deltas from {} poses",
        deltas.len(),
        poses.len()
    );
    deltas
}

/// Absolute poses from a start pose and a list of deltas.
///
/// Inverse of [`relative_deltas`]: the output has `deltas.len() + 1` poses,
/// the first being `start`.
pub fn integrate_deltas(start: Pose2D, deltas: &[Pose2D]) -> Vec<Pose2D> {
    let mut poses = Vec::with_capacity(deltas.len() + 1);
    poses.push(start);

    let mut current = start;
    for delta in deltas {
        current = current.compose(*delta);
        poses.push(current);
    }
    trace!("Integrated {} deltas, end pose {}", deltas.len(), current);
    poses
}
