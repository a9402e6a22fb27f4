//! Core domain: shared resources for run configuration.

use bevy::prelude::*;
use rand::Rng;

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl RunConfig {
    /// Use the configured seed, or roll a fresh one.
    pub fn from_seed(seed: Option<u64>) -> Self {
        Self {
            seed: seed.unwrap_or_else(|| rand::rng().random()),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::from_seed(None)
    }
}
