//! Movement domain: keyboard binding that emits input actions.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{InputAction, MovementIntent, Player};

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut last_axis: Local<Vec2>,
    mut actions: MessageWriter<InputAction>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    // Only report changes, like a device binding would
    let axis = Vec2::new(x, y);
    if axis != *last_axis {
        if axis == Vec2::ZERO {
            actions.write(InputAction::MoveCanceled);
        } else {
            actions.write(InputAction::Move(axis));
        }
        *last_axis = axis;
    }

    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK) {
        actions.write(InputAction::Jump);
    }
    if keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ) {
        actions.write(InputAction::Dash);
    }
    if keyboard.just_pressed(KeyCode::KeyZ) || keyboard.just_pressed(KeyCode::KeyU) {
        actions.write(InputAction::Attack);
    }
}

/// Snapshot every pending input action into the player's intent.
pub(crate) fn sample_input(
    mut actions: MessageReader<InputAction>,
    mut query: Query<&mut MovementIntent, With<Player>>,
) {
    let pending: Vec<InputAction> = actions.read().copied().collect();
    if pending.is_empty() {
        return;
    }

    for mut intent in &mut query {
        for action in &pending {
            intent.apply(*action);
        }
    }
}
