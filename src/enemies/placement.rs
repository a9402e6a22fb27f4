//! Enemies domain: rejection sampling of spawn points around a center.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

/// Error type for spawn placement failures.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// The exclusion zone covers the whole disk, so no point can be accepted
    ExclusionCoversDisk { radius: f32, min_distance: f32 },
    /// No accepted draw within the attempt budget
    AttemptsExhausted { attempts: u32 },
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::ExclusionCoversDisk {
                radius,
                min_distance,
            } => write!(
                f,
                "min distance {} must be below spawn radius {}",
                min_distance, radius
            ),
            PlacementError::AttemptsExhausted { attempts } => {
                write!(f, "no valid spawn point after {} attempts", attempts)
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// An annulus around a center, sampled uniformly by area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPlacement {
    radius: f32,
    min_distance: f32,
    max_attempts: u32,
}

impl SpawnPlacement {
    pub fn new(radius: f32, min_distance: f32, max_attempts: u32) -> Result<Self, PlacementError> {
        if radius.is_nan() || radius <= 0.0 || min_distance >= radius {
            return Err(PlacementError::ExclusionCoversDisk {
                radius,
                min_distance,
            });
        }
        Ok(Self {
            radius,
            min_distance: min_distance.max(0.0),
            max_attempts: max_attempts.max(1),
        })
    }

    /// Draw points in the disk until one lies outside the exclusion zone.
    pub fn sample_point(&self, center: Vec2, rng: &mut impl Rng) -> Result<Vec2, PlacementError> {
        for _ in 0..self.max_attempts {
            let candidate = center + random_in_disk(rng) * self.radius;
            if candidate.distance(center) >= self.min_distance {
                return Ok(candidate);
            }
        }
        Err(PlacementError::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }

    pub fn sample_points(
        &self,
        center: Vec2,
        count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<Vec2>, PlacementError> {
        (0..count).map(|_| self.sample_point(center, rng)).collect()
    }
}

/// Uniform point inside the unit disk.
fn random_in_disk(rng: &mut impl Rng) -> Vec2 {
    let r = rng.random::<f32>().sqrt();
    let theta = rng.random::<f32>() * TAU;
    Vec2::new(r * theta.cos(), r * theta.sin())
}
