//! Content domain: data-driven tuning loaded from `assets/data/tuning.ron`.

mod data;
mod loader;
#[cfg(test)]
mod tests;

pub use data::GameTuning;
pub use loader::{ContentLoadError, load_tuning};

use std::path::PathBuf;

use bevy::prelude::*;

use crate::core::RunConfig;
use crate::enemies::EnemyTemplates;

const DEFAULT_TUNING_PATH: &str = "assets/data/tuning.ron";
const TUNING_PATH_ENV: &str = "KESTREL_TUNING";

pub fn tuning_path() -> PathBuf {
    std::env::var_os(TUNING_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TUNING_PATH))
}

/// Inserts every tuning resource. Add after `DefaultPlugins` so logging is
/// available, and before the domain plugins.
pub struct ContentPlugin {
    pub tuning: GameTuning,
    pub load_error: Option<ContentLoadError>,
}

impl ContentPlugin {
    /// Load tuning from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        match load_tuning(&tuning_path()) {
            Ok(tuning) => Self {
                tuning,
                load_error: None,
            },
            Err(e) => Self {
                tuning: GameTuning::default(),
                load_error: Some(e),
            },
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        if let Some(e) = &self.load_error {
            warn!("{}; using default tuning", e);
        }

        let tuning = self.tuning.clone();

        let templates = if tuning.enemies.is_empty() {
            EnemyTemplates::default()
        } else {
            EnemyTemplates::from_list(tuning.enemies)
        };

        info!(
            "Loaded tuning: {} enemy templates, combo mode {:?}, {} Hz physics",
            templates.templates.len(),
            tuning.attack.mode,
            tuning.physics.fixed_hz
        );

        app.insert_resource(RunConfig::from_seed(tuning.seed))
            .insert_resource(tuning.movement)
            .insert_resource(tuning.attack)
            .insert_resource(tuning.spawner)
            .insert_resource(templates);
    }
}
