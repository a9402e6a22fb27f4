//! Content domain: the tuning file schema.

use serde::{Deserialize, Serialize};

use crate::combat::AttackTuning;
use crate::enemies::{EnemyTemplate, SpawnerConfig};
use crate::movement::{MovementTuning, PhysicsTuning};

/// Top level of `tuning.ron`. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GameTuning {
    /// Fixed seed for reproducible spawn placement
    pub seed: Option<u64>,
    pub physics: PhysicsTuning,
    pub movement: MovementTuning,
    pub attack: AttackTuning,
    pub spawner: SpawnerConfig,
    pub enemies: Vec<EnemyTemplate>,
}
