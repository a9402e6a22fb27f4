//! Enemies domain: actor factory and the startup spawner.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::RunConfig;
use crate::enemies::{
    EnemyTemplate, EnemyTemplates, Patrol, SpawnPlacement, SpawnRng, SpawnerConfig,
};
use crate::movement::{GameLayer, Player};

#[derive(Component, Debug)]
pub struct Enemy {
    pub template_id: String,
}

/// Create an enemy from a template; its patrol is anchored at `position`.
pub fn spawn_enemy(commands: &mut Commands, template: &EnemyTemplate, position: Vec2) -> Entity {
    let (r, g, b) = template.color;
    let size = Vec2::splat(template.size);

    commands
        .spawn((
            Enemy {
                template_id: template.id.clone(),
            },
            Patrol::new(position.x, template.patrol_speed, template.patrol_range),
            Sprite {
                color: Color::srgb(r, g, b),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            // Patrol owns the position; the body only collides
            RigidBody::Kinematic,
            Collider::rectangle(size.x, size.y),
            CollisionLayers::new(GameLayer::Enemy, [GameLayer::Player]),
        ))
        .id()
}

pub(crate) fn init_spawn_rng(mut commands: Commands, run_config: Res<RunConfig>) {
    commands.insert_resource(SpawnRng(ChaCha8Rng::seed_from_u64(run_config.seed)));
}

/// Scatter enemies around the player once the player exists.
pub(crate) fn spawn_enemies(
    mut commands: Commands,
    config: Res<SpawnerConfig>,
    templates: Res<EnemyTemplates>,
    mut rng: ResMut<SpawnRng>,
    player_query: Query<&Transform, With<Player>>,
) {
    let Some(player_transform) = player_query.iter().next() else {
        warn!("No player to spawn enemies around");
        return;
    };
    let center = player_transform.translation.truncate();

    let Some(template) = templates.get(&config.template_id) else {
        error!("Unknown enemy template '{}'", config.template_id);
        return;
    };

    let placement =
        match SpawnPlacement::new(config.radius, config.min_distance, config.max_attempts) {
            Ok(placement) => placement,
            Err(e) => {
                error!("Spawner disabled: {}", e);
                return;
            }
        };

    match placement.sample_points(center, config.count, &mut rng.0) {
        Ok(points) => {
            for point in &points {
                spawn_enemy(&mut commands, template, *point);
            }
            info!(
                "Spawned {} '{}' enemies around {:?}",
                points.len(),
                template.id,
                center
            );
        }
        Err(e) => error!("Enemy spawn failed: {}", e),
    }
}

pub(crate) fn patrol_enemies(
    time: Res<Time>,
    mut query: Query<(&Enemy, &mut Transform, &mut Patrol)>,
) {
    let dt = time.delta_secs();

    for (enemy, mut transform, mut patrol) in &mut query {
        let previous = patrol.direction;
        transform.translation.x = patrol.step(transform.translation.x, dt);
        if patrol.direction != previous {
            debug!(
                "{} turned at x={:.1}",
                enemy.template_id, transform.translation.x
            );
        }
    }
}
