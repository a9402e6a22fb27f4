//! Arena domain: static level geometry the player stands on.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

const GROUND_COLOR: Color = Color::srgb(0.4, 0.5, 0.4);
const ARENA_WIDTH: f32 = 1600.0;
const FLOOR_Y: f32 = -300.0;
const THICKNESS: f32 = 40.0;

/// Floating platforms as (center, width)
const PLATFORMS: [(Vec2, f32); 3] = [
    (Vec2::new(-360.0, -160.0), 220.0),
    (Vec2::new(0.0, -40.0), 180.0),
    (Vec2::new(380.0, -150.0), 240.0),
];

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_arena);
    }
}

fn spawn_arena(mut commands: Commands) {
    spawn_ground(&mut commands, Vec2::new(0.0, FLOOR_Y), ARENA_WIDTH);
    for (center, width) in PLATFORMS {
        spawn_ground(&mut commands, center, width);
    }
}

fn spawn_ground(commands: &mut Commands, center: Vec2, width: f32) {
    commands.spawn((
        Ground,
        Sprite {
            color: GROUND_COLOR,
            custom_size: Some(Vec2::new(width, THICKNESS)),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(width, THICKNESS),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}
