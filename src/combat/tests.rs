//! Combat domain: unit tests for both combo variants.

use std::time::Duration;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use super::systems::advance_combo_sequences;
use super::{AttackKind, AttackPerformed, AttackTuning, ComboCounter, ComboMode, ComboSequence};

const RESET: f32 = 0.8;
const DELAY: f32 = 0.25;

// -----------------------------------------------------------------------------
// Timestamp combo
// -----------------------------------------------------------------------------

#[test]
fn test_combo_counter_chains_three_hits() {
    let mut combo = ComboCounter::default();

    let hits: Vec<_> = [1.0, 1.2, 1.4]
        .into_iter()
        .map(|t| combo.trigger(t, RESET))
        .collect();

    assert_eq!(
        hits,
        vec![
            Some(AttackKind::Light(1)),
            Some(AttackKind::Light(2)),
            Some(AttackKind::Finisher)
        ]
    );
    assert_eq!(combo.step, 0);
}

#[test]
fn test_combo_counter_resets_after_idle() {
    let mut combo = ComboCounter::default();
    combo.trigger(1.0, RESET);
    combo.trigger(1.3, RESET);

    assert_eq!(combo.trigger(1.3 + RESET + 0.01, RESET), Some(AttackKind::Light(1)));
}

#[test]
fn test_combo_counter_keeps_chain_at_reset_boundary() {
    let mut combo = ComboCounter::default();
    combo.trigger(1.0, RESET);

    // Exactly the reset window does not exceed it
    assert_eq!(combo.trigger(1.0 + RESET, RESET), Some(AttackKind::Light(2)));
}

#[test]
fn test_combo_counter_wraps_after_finisher() {
    let mut combo = ComboCounter::default();
    for t in [1.0, 1.1, 1.2] {
        combo.trigger(t, RESET);
    }

    assert_eq!(combo.trigger(1.3, RESET), Some(AttackKind::Light(1)));
}

#[test]
fn test_attack_kind_display() {
    assert_eq!(AttackKind::Light(2).to_string(), "light 2");
    assert_eq!(AttackKind::Finisher.to_string(), "finisher");
    assert_eq!(AttackKind::from_step(4), None);
}

// -----------------------------------------------------------------------------
// Timed sequence combo
// -----------------------------------------------------------------------------

#[test]
fn test_sequence_emits_three_spaced_hits() {
    let mut sequence = ComboSequence::default();
    assert!(sequence.trigger());

    let dt = 0.05;
    let mut hits = Vec::new();
    for frame in 0..40 {
        if let Some(hit) = sequence.advance(dt, DELAY) {
            hits.push((frame, hit));
        }
    }

    let kinds: Vec<_> = hits.iter().map(|(_, hit)| *hit).collect();
    assert_eq!(
        kinds,
        vec![
            AttackKind::Light(1),
            AttackKind::Light(2),
            AttackKind::Finisher
        ]
    );

    // Frames between hits cover the full delay
    for pair in hits.windows(2) {
        let gap = (pair[1].0 - pair[0].0) as f32 * dt;
        assert!(gap >= DELAY - 1e-4, "hits only {gap}s apart");
    }
    assert!(!sequence.is_active());
}

#[test]
fn test_sequence_drops_trigger_while_active() {
    let mut sequence = ComboSequence::default();
    assert!(sequence.trigger());
    sequence.advance(0.01, DELAY);

    assert!(!sequence.trigger());

    let mut count = 1;
    for _ in 0..100 {
        if sequence.advance(0.05, DELAY).is_some() {
            count += 1;
        }
    }
    assert_eq!(count, 3);
}

#[test]
fn test_sequence_can_restart_after_finishing() {
    let mut sequence = ComboSequence::default();
    sequence.trigger();
    for _ in 0..3 {
        sequence.advance(DELAY, DELAY);
    }
    assert!(!sequence.is_active());

    assert!(sequence.trigger());
    assert_eq!(sequence.advance(0.0, DELAY), Some(AttackKind::Light(1)));
}

#[test]
fn test_idle_sequence_emits_nothing() {
    let mut sequence = ComboSequence::default();
    assert_eq!(sequence.advance(1.0, DELAY), None);
}

// -----------------------------------------------------------------------------
// Sequence system
// -----------------------------------------------------------------------------

#[derive(Resource, Default)]
struct SeenAttacks(Vec<AttackKind>);

fn record_attacks(mut events: MessageReader<AttackPerformed>, mut seen: ResMut<SeenAttacks>) {
    seen.0.extend(events.read().map(|event| event.attack));
}

fn sequence_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .insert_resource(AttackTuning {
            mode: ComboMode::TimedSequence,
            sequence_step_delay: DELAY,
            ..Default::default()
        })
        .init_resource::<SeenAttacks>()
        .add_message::<AttackPerformed>()
        .add_systems(Update, (advance_combo_sequences, record_attacks).chain());
    app
}

fn spawn_triggered_sequence(app: &mut App) -> Entity {
    let mut sequence = ComboSequence::default();
    sequence.trigger();
    app.world_mut().spawn(sequence).id()
}

#[test]
fn test_sequence_system_plays_full_chain() {
    let mut app = sequence_app();
    spawn_triggered_sequence(&mut app);

    for _ in 0..20 {
        app.update();
    }

    assert_eq!(
        app.world().resource::<SeenAttacks>().0,
        vec![
            AttackKind::Light(1),
            AttackKind::Light(2),
            AttackKind::Finisher
        ]
    );
}

#[test]
fn test_despawn_aborts_sequence() {
    let mut app = sequence_app();
    let actor = spawn_triggered_sequence(&mut app);

    for _ in 0..5 {
        app.update();
        if !app.world().resource::<SeenAttacks>().0.is_empty() {
            break;
        }
    }
    assert_eq!(app.world().resource::<SeenAttacks>().0.len(), 1);

    app.world_mut().despawn(actor);
    for _ in 0..20 {
        app.update();
    }

    assert_eq!(app.world().resource::<SeenAttacks>().0.len(), 1);
}
