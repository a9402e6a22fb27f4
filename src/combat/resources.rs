//! Combat domain: tuning resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Which combo behavior the player is spawned with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum ComboMode {
    #[default]
    Timestamp,
    TimedSequence,
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AttackTuning {
    pub mode: ComboMode,
    /// Idle time after which the timestamp combo restarts
    pub combo_reset_time: f32,
    /// Delay between hits of a timed combo
    pub sequence_step_delay: f32,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            mode: ComboMode::Timestamp,
            combo_reset_time: 0.8,
            sequence_step_delay: 0.25,
        }
    }
}
