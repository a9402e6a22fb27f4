//! Enemies domain: templates, spawner configuration and randomness.

use std::collections::HashMap;

use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Data-driven enemy definition used by the actor factory
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnemyTemplate {
    pub id: String,
    pub size: f32,
    /// sRGB color components
    pub color: (f32, f32, f32),
    pub patrol_speed: f32,
    pub patrol_range: f32,
}

impl Default for EnemyTemplate {
    fn default() -> Self {
        Self {
            id: "enemy_slime".to_string(),
            size: 32.0,
            color: (0.8, 0.3, 0.3),
            patrol_speed: 128.0,
            patrol_range: 192.0,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct EnemyTemplates {
    pub templates: HashMap<String, EnemyTemplate>,
}

impl EnemyTemplates {
    pub fn from_list(list: Vec<EnemyTemplate>) -> Self {
        Self {
            templates: list.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&EnemyTemplate> {
        self.templates.get(id)
    }
}

impl Default for EnemyTemplates {
    fn default() -> Self {
        Self::from_list(vec![EnemyTemplate::default()])
    }
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SpawnerConfig {
    pub template_id: String,
    pub count: usize,
    pub radius: f32,
    /// Exclusion distance around the player; must be below `radius`
    pub min_distance: f32,
    /// Rejection sampling budget per point
    pub max_attempts: u32,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            template_id: "enemy_slime".to_string(),
            count: 4,
            radius: 480.0,
            min_distance: 160.0,
            max_attempts: 64,
        }
    }
}

/// Seeded generator for spawn placement
#[derive(Resource, Debug)]
pub struct SpawnRng(pub ChaCha8Rng);
