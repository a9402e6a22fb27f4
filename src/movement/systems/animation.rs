//! Movement domain: animation parameter publishing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    AirState, AnimatorParams, MovementIntent, MovementTuning, Player, PlayerMotion,
};

pub(crate) fn update_animation_params(
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &MovementIntent,
            &LinearVelocity,
            &mut PlayerMotion,
            &mut AnimatorParams,
        ),
        With<Player>,
    >,
) {
    for (intent, velocity, mut motion, mut params) in &mut query {
        let previous = motion.air;
        motion.update_air_state(velocity.y, &tuning);
        if motion.air != previous {
            debug!("Air state {:?} -> {:?}", previous, motion.air);
        }

        let next = AnimatorParams {
            speed: intent.move_axis.x.abs(),
            is_jumping: motion.air == AirState::Rising,
            is_falling: motion.air == AirState::Falling,
            is_dashing: motion.dash.is_active(),
        };
        params.set_if_neq(next);
    }
}
