//! Movement domain: tuning resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal speed at full stick deflection
    pub move_speed: f32,
    /// Upward impulse applied on a successful jump
    pub jump_force: f32,
    /// Horizontal speed forced while dashing
    pub dash_force: f32,
    pub dash_duration: f32,
    /// Grace window after leaving the ground during which a jump is still honored
    pub coyote_time: f32,
    /// Distance from the player's origin down to the ground probe center
    pub ground_probe_depth: f32,
    pub ground_probe_radius: f32,
    /// Vertical speed dead band used when classifying rising/falling
    pub air_velocity_threshold: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            jump_force: 680.0,
            dash_force: 900.0,
            dash_duration: 0.2,
            coyote_time: 0.2,
            ground_probe_depth: 24.0,
            ground_probe_radius: 6.0,
            air_velocity_threshold: 0.1,
        }
    }
}

/// Physics world settings handed to the integrator at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsTuning {
    pub gravity: f32,
    /// Fixed tick rate for physics-affecting updates
    pub fixed_hz: f64,
    /// Pixels per meter, used by the solver for tolerances
    pub length_unit: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: 1800.0,
            fixed_hz: 50.0,
            length_unit: 48.0,
        }
    }
}
