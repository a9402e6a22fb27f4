//! Combat domain: player attack combos.

mod combo;
mod events;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use combo::{AttackKind, ComboCounter, ComboSequence};
pub use events::AttackPerformed;
pub use resources::{AttackTuning, ComboMode};

use bevy::prelude::*;

use crate::combat::systems::{advance_combo_sequences, log_attacks, process_attack_input};
use crate::movement::MovementSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttackTuning>()
            .add_message::<AttackPerformed>()
            .add_systems(
                Update,
                (process_attack_input, advance_combo_sequences, log_attacks)
                    .chain()
                    .after(MovementSet::Sample),
            );
    }
}
