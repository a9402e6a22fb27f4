//! Movement domain: player locomotion driven by buffered input.

mod bootstrap;
mod components;
mod controller;
mod intent;
mod resources;
mod systems;

pub use components::{AirState, AnimatorParams, DashState, Facing, GameLayer, Ground, Player};
pub use controller::PlayerMotion;
pub use intent::{InputAction, MovementIntent};
pub use resources::{MovementTuning, PhysicsTuning};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_motion, detect_ground, read_input, sample_input, update_animation_params, update_facing,
};

/// Frame-rate stages of the player update. Other domains order against these.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Input actions have been folded into `MovementIntent`
    Sample,
    /// Facing, grounded and animation state refreshed
    Update,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_message::<InputAction>()
            .configure_sets(Update, (MovementSet::Sample, MovementSet::Update).chain())
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, sample_input)
                    .chain()
                    .in_set(MovementSet::Sample),
            )
            .add_systems(
                Update,
                (update_facing, detect_ground, update_animation_params)
                    .chain()
                    .in_set(MovementSet::Update),
            )
            .add_systems(FixedUpdate, apply_motion);
    }
}
