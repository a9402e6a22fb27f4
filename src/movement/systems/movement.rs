//! Movement domain: facing and physics-tick velocity updates.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Facing, MovementIntent, MovementTuning, Player, PlayerMotion};

pub(crate) fn update_facing(
    mut query: Query<(&MovementIntent, &mut PlayerMotion, &mut Sprite), With<Player>>,
) {
    for (intent, mut motion, mut sprite) in &mut query {
        if motion.update_facing(intent.move_axis.x) {
            sprite.flip_x = motion.facing == Facing::Left;
            debug!("Flipped to face {:?}", motion.facing);
        }
    }
}

/// Runs on the fixed physics tick.
pub(crate) fn apply_motion(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut PlayerMotion,
            &mut MovementIntent,
            &mut LinearVelocity,
            &ComputedMass,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut motion, mut intent, mut velocity, mass) in &mut query {
        let step = motion.fixed_step(&mut intent, dt, &tuning);

        // Vertical velocity belongs to the integrator; only impulses touch it
        velocity.x = step.horizontal_velocity;
        if let Some(impulse) = step.jump_impulse {
            velocity.y += impulse * mass.inverse();
        }
    }
}
