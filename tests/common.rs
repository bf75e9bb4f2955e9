//! Test utilities for Disha-Pose.
//!
//! Seeded random poses and reference trajectories.

#![allow(dead_code)]

use std::f64::consts::{FRAC_PI_2, PI};

use disha_pose::{Pose2D, Tolerance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tolerance loose enough for chains of a few compositions.
pub fn loose() -> Tolerance {
    Tolerance::new(1e-9, 1e-9).unwrap()
}

/// Deterministic RNG so failures reproduce.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random pose within a 20m square, heading anywhere on the circle.
pub fn random_pose(rng: &mut StdRng) -> Pose2D {
    Pose2D::new(
        rng.random_range(-10.0..10.0),
        rng.random_range(-10.0..10.0),
        rng.random_range(-PI..=PI),
    )
    .unwrap()
}

/// Create a square loop trajectory (counter-clockwise).
pub fn square_trajectory(side_length: f64, points_per_side: usize) -> Vec<Pose2D> {
    let mut poses = Vec::new();
    let spacing = side_length / points_per_side as f64;

    for i in 0..points_per_side {
        poses.push(Pose2D::new(i as f64 * spacing, 0.0, 0.0).unwrap());
    }
    for i in 0..points_per_side {
        poses.push(Pose2D::new(side_length, i as f64 * spacing, FRAC_PI_2).unwrap());
    }
    for i in 0..points_per_side {
        poses.push(Pose2D::new(side_length - i as f64 * spacing, side_length, PI).unwrap());
    }
    for i in 0..points_per_side {
        poses.push(Pose2D::new(0.0, side_length - i as f64 * spacing, -FRAC_PI_2).unwrap());
    }

    poses
}
