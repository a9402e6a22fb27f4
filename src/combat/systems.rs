//! Combat domain: attack triggering, sequencing and logging.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::events::AttackPerformed;
use crate::combat::resources::AttackTuning;
use crate::combat::{ComboCounter, ComboSequence};
use crate::movement::{MovementIntent, Player};

pub(crate) fn process_attack_input(
    time: Res<Time>,
    tuning: Res<AttackTuning>,
    mut query: Query<
        (
            Entity,
            &mut MovementIntent,
            Option<&mut ComboCounter>,
            Option<&mut ComboSequence>,
        ),
        With<Player>,
    >,
    mut attacks: MessageWriter<AttackPerformed>,
) {
    let now = time.elapsed_secs();

    for (entity, mut intent, counter, sequence) in &mut query {
        if !intent.take_attack() {
            continue;
        }

        if let Some(mut counter) = counter {
            if let Some(attack) = counter.trigger(now, tuning.combo_reset_time) {
                attacks.write(AttackPerformed {
                    attacker: entity,
                    attack,
                });
            }
        } else if let Some(mut sequence) = sequence {
            if !sequence.trigger() {
                debug!("Combo already playing, trigger dropped");
            }
        }
    }
}

/// Plays active timed combos. Despawning the owner drops its sequence with it.
pub(crate) fn advance_combo_sequences(
    time: Res<Time>,
    tuning: Res<AttackTuning>,
    mut query: Query<(Entity, &mut ComboSequence)>,
    mut attacks: MessageWriter<AttackPerformed>,
) {
    let dt = time.delta_secs();

    for (entity, mut sequence) in &mut query {
        if !sequence.is_active() {
            continue;
        }
        if let Some(attack) = sequence.advance(dt, tuning.sequence_step_delay) {
            attacks.write(AttackPerformed {
                attacker: entity,
                attack,
            });
        }
    }
}

pub(crate) fn log_attacks(mut attacks: MessageReader<AttackPerformed>) {
    for event in attacks.read() {
        info!("{:?} performed {}", event.attacker, event.attack);
    }
}
