//! Movement domain: buffered input actions and the per-actor movement intent.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Input action delivered by the key binding layer.
/// Actions arrive at frame rate and are buffered until the player samples them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    Move(Vec2),
    MoveCanceled,
    Jump,
    Dash,
    Attack,
}

impl Message for InputAction {}

/// Input intent: written in Update, consumed in FixedUpdate.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct MovementIntent {
    /// Last move vector; persists until canceled
    pub move_axis: Vec2,
    pub jump_requested: bool,
    pub dash_requested: bool,
    /// Attack trigger; consumed by the combat domain on the same frame
    pub attack_requested: bool,
}

impl MovementIntent {
    /// Fold one pending input action into the intent.
    pub fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::Move(axis) => self.move_axis = axis,
            InputAction::MoveCanceled => self.move_axis = Vec2::ZERO,
            InputAction::Jump => self.jump_requested = true,
            InputAction::Dash => self.dash_requested = true,
            InputAction::Attack => self.attack_requested = true,
        }
    }

    pub fn take_attack(&mut self) -> bool {
        std::mem::take(&mut self.attack_requested)
    }
}
