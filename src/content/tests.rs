//! Content domain: tuning file parsing tests.

use std::path::Path;

use super::loader::parse_tuning;
use super::{GameTuning, load_tuning};
use crate::combat::ComboMode;

#[test]
fn test_empty_file_uses_defaults() {
    let tuning = parse_tuning("()", "inline").unwrap();
    let defaults = GameTuning::default();

    assert_eq!(tuning.seed, None);
    assert_eq!(tuning.movement.move_speed, defaults.movement.move_speed);
    assert_eq!(tuning.attack.mode, ComboMode::Timestamp);
    assert!(tuning.enemies.is_empty());
}

#[test]
fn test_partial_sections_override_fields() {
    let tuning = parse_tuning(
        r#"(
            seed: 99,
            movement: (coyote_time: 0.15),
            attack: (mode: TimedSequence),
            spawner: (count: 2, template_id: "bat"),
            enemies: [(id: "bat", patrol_speed: 40.0)],
        )"#,
        "inline",
    )
    .unwrap();

    assert_eq!(tuning.seed, Some(99));
    assert_eq!(tuning.movement.coyote_time, 0.15);
    assert_eq!(tuning.movement.dash_duration, 0.2);
    assert_eq!(tuning.attack.mode, ComboMode::TimedSequence);
    assert_eq!(tuning.spawner.count, 2);
    assert_eq!(tuning.enemies[0].id, "bat");
    assert_eq!(tuning.enemies[0].patrol_speed, 40.0);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_tuning("(movement: ", "broken.ron").unwrap_err();

    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = load_tuning(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_tuning_file_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/tuning.ron");
    let tuning = load_tuning(&path).unwrap();

    assert!(tuning.spawner.min_distance < tuning.spawner.radius);
    assert!(
        tuning
            .enemies
            .iter()
            .any(|t| t.id == tuning.spawner.template_id)
    );
}
