mod arena;
mod combat;
mod content;
mod core;
mod enemies;
mod movement;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ContentPlugin;

fn main() {
    let content = ContentPlugin::load();
    let physics = content.tuning.physics.clone();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Kestrel".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default().with_length_unit(physics.length_unit))
        .insert_resource(Gravity(Vec2::NEG_Y * physics.gravity))
        .insert_resource(Time::<Fixed>::from_hz(physics.fixed_hz))
        .add_plugins(content)
        .add_plugins((
            core::CorePlugin,
            arena::ArenaPlugin,
            movement::MovementPlugin,
            combat::CombatPlugin,
            enemies::EnemiesPlugin,
        ))
        .run();
}
