//! Movement domain: the player's ground/air/dash state machine.
//!
//! `PlayerMotion` holds no engine handles. Systems sample the world (ground
//! contact, velocity, elapsed time) and hand those values in; the results are
//! written back to the physics body by the caller.

use bevy::prelude::*;

use crate::movement::{AirState, DashState, Facing, MovementIntent, MovementTuning};

/// Velocity changes requested by one fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionStep {
    pub horizontal_velocity: f32,
    /// Upward impulse to apply this tick, if a jump succeeded
    pub jump_impulse: Option<f32>,
}

#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct PlayerMotion {
    pub grounded: bool,
    pub facing: Facing,
    pub coyote_timer: f32,
    pub dash: DashState,
    pub air: AirState,
}

impl PlayerMotion {
    /// Flip facing when the horizontal input points the other way.
    /// Returns true when a flip happened.
    pub fn update_facing(&mut self, move_x: f32) -> bool {
        let wants_flip = match self.facing {
            Facing::Right => move_x < 0.0,
            Facing::Left => move_x > 0.0,
        };
        if wants_flip {
            self.facing = self.facing.flipped();
        }
        wants_flip
    }

    /// Refresh the grounded flag and the coyote window.
    pub fn update_grounded_and_coyote(
        &mut self,
        grounded: bool,
        dt: f32,
        tuning: &MovementTuning,
    ) {
        if grounded && !self.grounded {
            debug!("Landed");
        } else if !grounded && self.grounded {
            debug!("Left ground, coyote window {:.2}s", tuning.coyote_time);
        }

        self.grounded = grounded;
        if grounded {
            self.coyote_timer = tuning.coyote_time;
        } else {
            self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        }
    }

    /// Classify vertical motion for animation.
    /// Inside the dead band while airborne the previous state is kept.
    pub fn update_air_state(&mut self, vertical_velocity: f32, tuning: &MovementTuning) {
        let threshold = tuning.air_velocity_threshold;
        if self.grounded {
            self.air = AirState::Grounded;
        } else if vertical_velocity > threshold {
            self.air = AirState::Rising;
        } else if vertical_velocity < -threshold {
            self.air = AirState::Falling;
        }
    }

    /// Authoritative per-physics-tick update.
    ///
    /// An active dash forces horizontal velocity and skips everything else,
    /// leaving pending jump/dash requests latched for later ticks.
    pub fn fixed_step(
        &mut self,
        intent: &mut MovementIntent,
        dt: f32,
        tuning: &MovementTuning,
    ) -> MotionStep {
        if let DashState::Active { remaining } = self.dash {
            let remaining = remaining - dt;
            self.dash = if remaining <= 0.0 {
                debug!("Dash finished");
                DashState::Inactive
            } else {
                DashState::Active { remaining }
            };
            return MotionStep {
                horizontal_velocity: self.facing.sign() * tuning.dash_force,
                jump_impulse: None,
            };
        }

        let horizontal_velocity = intent.move_axis.x * tuning.move_speed;

        let mut jump_impulse = None;
        if intent.jump_requested {
            if self.coyote_timer > 0.0 {
                jump_impulse = Some(tuning.jump_force);
                self.coyote_timer = 0.0;
                debug!("Jump: grounded={}", self.grounded);
            }
            intent.jump_requested = false;
        }

        if intent.dash_requested {
            self.dash = DashState::Active {
                remaining: tuning.dash_duration,
            };
            intent.dash_requested = false;
            debug!("Dash started facing {:?}", self.facing);
        }

        MotionStep {
            horizontal_velocity,
            jump_impulse,
        }
    }
}
