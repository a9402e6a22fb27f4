//! Enemies domain: patrolling enemies scattered around the player.

mod patrol;
mod placement;
mod resources;
mod spawn;

pub use patrol::Patrol;
pub use placement::SpawnPlacement;
pub use resources::{EnemyTemplate, EnemyTemplates, SpawnRng, SpawnerConfig};

use bevy::prelude::*;

use crate::enemies::spawn::{init_spawn_rng, patrol_enemies, spawn_enemies};

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnerConfig>()
            .init_resource::<EnemyTemplates>()
            .add_systems(Startup, init_spawn_rng)
            .add_systems(PostStartup, spawn_enemies)
            .add_systems(Update, patrol_enemies);
    }
}
