//! Movement domain: player spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AttackTuning, ComboCounter, ComboMode, ComboSequence};
use crate::movement::{AnimatorParams, GameLayer, MovementIntent, Player, PlayerMotion};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const PLAYER_SPAWN: Vec2 = Vec2::new(0.0, 100.0);

pub(crate) fn spawn_player(mut commands: Commands, attack_tuning: Res<AttackTuning>) {
    let mut player = commands.spawn((
        // Identity & Movement
        (
            Player,
            PlayerMotion::default(),
            MovementIntent::default(),
            AnimatorParams::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(PLAYER_SPAWN.x, PLAYER_SPAWN.y, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            // Unit mass so the jump impulse reads as a launch speed
            Mass(1.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));

    match attack_tuning.mode {
        ComboMode::Timestamp => {
            player.insert(ComboCounter::default());
        }
        ComboMode::TimedSequence => {
            player.insert(ComboSequence::default());
        }
    }

    info!(
        "Spawned player at {:?} with {:?} combo",
        PLAYER_SPAWN, attack_tuning.mode
    );
}
